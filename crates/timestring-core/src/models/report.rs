//! Outcome of a pipeline run.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use crate::{db::ExtendSummary, error::FormatError};

/// The steps of a run, in execution order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStep {
    Resolve,
    Name,
    Provision,
    Extract,
    Format,
    Write,
}

impl PipelineStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::Resolve => "resolve",
            PipelineStep::Name => "name",
            PipelineStep::Provision => "provision",
            PipelineStep::Extract => "extract",
            PipelineStep::Format => "format",
            PipelineStep::Write => "write",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start and end of one step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepTiming {
    pub step: PipelineStep,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
}

impl StepTiming {
    /// Elapsed wall time in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        self.finished_at.as_millisecond() - self.started_at.as_millisecond()
    }
}

/// Everything a completed run did to the table.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Table identifier as given
    pub table: String,
    pub input_field: String,
    /// Output field actually used, after validation and suffixing
    pub output_field: String,
    /// Whether the output field was added by this run
    pub field_created: bool,
    pub rows_extracted: usize,
    pub write: ExtendSummary,
    /// Set when the formatting step failed and the field was left unpopulated
    pub format_error: Option<FormatError>,
    pub timings: Vec<StepTiming>,
}

impl RunReport {
    /// Whether the output field received formatted values.
    pub fn populated(&self) -> bool {
        self.format_error.is_none()
    }
}
