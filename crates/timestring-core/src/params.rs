//! Parameter structures for timestring operations.
//!
//! These structures carry no interface-specific derives. The CLI defines its
//! own clap wrappers and converts them into these types, keeping the core
//! free of argument parsing concerns:
//!
//! ```text
//! CLI Args (clap) → Core Params → Pipeline
//! ```

/// Default number of numeric suffixes tried when naming the output field.
pub const DEFAULT_MAX_NAME_ATTEMPTS: u32 = 1000;

/// Default name of the in-memory join key column.
pub const DEFAULT_JOIN_FIELD: &str = "frame_index_join";

/// Parameters for adding a formatted time string field to a table.
///
/// The four fields mirror the tool's positional inputs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTimeString {
    /// Table identifier, `<workspace>/<table>`
    pub table: String,
    /// Existing datetime field to read
    pub input_field: String,
    /// Desired name of the new text field
    pub new_field: String,
    /// strftime-style pattern applied to every value
    pub time_format: String,
}

/// Run configuration, passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Numeric suffixes tried before giving up on a unique name
    pub max_name_attempts: u32,
    /// Name of the join key column added to the frame
    pub join_field: String,
    /// Write into the desired field even if it already exists
    pub overwrite_output: bool,
    /// Apply field name validation to the desired name
    pub validate_names: bool,
    /// Length of the created text field, host default when unset
    pub field_length: Option<u32>,
    /// Record start and end timestamps for every step
    pub report_timing: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_name_attempts: DEFAULT_MAX_NAME_ATTEMPTS,
            join_field: DEFAULT_JOIN_FIELD.to_string(),
            overwrite_output: false,
            validate_names: true,
            field_length: None,
            report_timing: false,
        }
    }
}
