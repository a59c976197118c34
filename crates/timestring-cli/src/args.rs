//! Command-line arguments.
//!
//! The clap structures here wrap the core parameter types and convert into
//! them with `From`, so the core stays free of argument parsing concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Pipeline
//! ```

use clap::Parser;
use timestring_core::params::{
    AddTimeString, PipelineConfig, DEFAULT_JOIN_FIELD, DEFAULT_MAX_NAME_ATTEMPTS,
};

/// Add a text field holding a formatted datetime field to a feature table
///
/// Reads a datetime field from a table in a SQLite or GeoPackage workspace,
/// formats every value with a strftime-style pattern and writes the result
/// into a new text field on the same table. If the field name is taken a
/// numeric suffix is appended. If any value cannot be formatted the new field
/// is left empty and the problem is reported.
#[derive(Parser)]
#[command(version, about, name = "timestring")]
pub struct Args {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub options: PipelineArgs,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}

/// The four positional inputs, in order.
#[derive(clap::Args)]
pub struct TargetArgs {
    /// Target table, written as <workspace>/<table>, e.g. data/city.gpkg/permits
    pub table: String,
    /// Existing datetime field to format
    pub input_field: String,
    /// Name of the new text field
    pub new_field: String,
    /// strftime-style format, e.g. "%Y-%m-%d"
    #[arg(allow_hyphen_values = true)]
    pub time_format: String,
}

impl From<TargetArgs> for AddTimeString {
    fn from(val: TargetArgs) -> Self {
        AddTimeString {
            table: val.table,
            input_field: val.input_field,
            new_field: val.new_field,
            time_format: val.time_format,
        }
    }
}

/// Pipeline configuration flags.
#[derive(clap::Args)]
pub struct PipelineArgs {
    /// Write into the named field even if it exists instead of adding a
    /// suffixed one
    #[arg(long)]
    pub overwrite: bool,

    /// Numeric suffixes to try before giving up on a unique field name
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_ATTEMPTS)]
    pub max_name_attempts: u32,

    /// Name of the temporary join key column
    #[arg(long, default_value = DEFAULT_JOIN_FIELD)]
    pub join_field: String,

    /// Use the new field name as given, without replacing invalid characters
    #[arg(long)]
    pub no_validate_names: bool,

    /// Length of the new text field
    #[arg(long)]
    pub field_length: Option<u32>,

    /// Report start time and duration of each step
    #[arg(long)]
    pub report_timing: bool,
}

impl From<PipelineArgs> for PipelineConfig {
    fn from(val: PipelineArgs) -> Self {
        PipelineConfig {
            max_name_attempts: val.max_name_attempts,
            join_field: val.join_field,
            overwrite_output: val.overwrite,
            validate_names: !val.no_validate_names,
            field_length: val.field_length,
            report_timing: val.report_timing,
        }
    }
}
