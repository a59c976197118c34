//! timestring CLI
//!
//! Adds a formatted time string field to a feature table.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use timestring_core::PipelineBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        target,
        options,
        json,
        no_color,
    } = Args::parse();

    let pipeline = PipelineBuilder::new()
        .with_config(options.into())
        .build()
        .context("Failed to configure pipeline")?;

    info!("timestring started");

    Cli::new(TerminalRenderer::new(!no_color), json).add_time_string(&pipeline, &target.into())
}
