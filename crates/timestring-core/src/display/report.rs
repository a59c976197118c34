//! Markdown summary of a pipeline run.

use std::fmt;

use super::{LocalTime, OperationStatus};
use crate::models::RunReport;

/// Start of the line describing a formatting failure.
pub const FORMAT_FAILURE_LABEL: &str = "Could not process datetime field:";

impl RunReport {
    /// Final status line for the run.
    pub fn status(&self) -> OperationStatus {
        match &self.format_error {
            None => OperationStatus::success(format!(
                "Field '{}' populated for {} rows",
                self.output_field, self.write.rows_matched
            )),
            Some(_) => OperationStatus::failure(format!(
                "Field '{}' was left unpopulated",
                self.output_field
            )),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Time string field `{}`", self.output_field)?;
        writeln!(f)?;
        writeln!(f, "- **Table:** {}", self.table)?;
        writeln!(f, "- **Input field:** {}", self.input_field)?;
        writeln!(
            f,
            "- **Output field:** {} ({})",
            self.output_field,
            if self.field_created { "created" } else { "existing" }
        )?;
        writeln!(f, "- **Rows extracted:** {}", self.rows_extracted)?;
        writeln!(f, "- **Rows written:** {}", self.write.rows_matched)?;
        if self.write.rows_unmatched > 0 {
            writeln!(f, "- **Rows without a match:** {}", self.write.rows_unmatched)?;
        }

        if let Some(error) = &self.format_error {
            writeln!(f)?;
            writeln!(f, "{FORMAT_FAILURE_LABEL} {error}")?;
        }

        if !self.timings.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Timings")?;
            writeln!(f)?;
            for timing in &self.timings {
                writeln!(
                    f,
                    "- {}: {} ({} ms)",
                    timing.step,
                    LocalTime(&timing.started_at),
                    timing.elapsed_ms()
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.status())
    }
}
