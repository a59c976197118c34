//! Runs the pipeline and prints its report.

use anyhow::{Context, Result};
use log::info;
use timestring_core::{params::AddTimeString, Pipeline};

use crate::renderer::TerminalRenderer;

/// Output settings for a single run.
pub struct Cli {
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Runs the pipeline against the target table.
    ///
    /// Host errors abort with a non-zero exit status. A formatting failure
    /// still completes the run and is shown in the report.
    pub fn add_time_string(&self, pipeline: &Pipeline, params: &AddTimeString) -> Result<()> {
        info!(
            "Adding '{}' to {} from '{}'",
            params.new_field, params.table, params.input_field
        );

        let report = pipeline
            .run(params)
            .with_context(|| format!("Failed to add time string field to {}", params.table))?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render_report(&report)
        }
    }
}
