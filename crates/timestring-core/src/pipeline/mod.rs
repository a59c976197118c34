//! The add-time-string pipeline.
//!
//! A run is a strict sequence of steps against one table:
//!
//! ```text
//! Resolve → Name → Provision → Extract → Format → Write
//! ```
//!
//! Host errors from any step abort the run. A failed [`format`] step does
//! not: it is logged, recorded in the [`RunReport`], and the run still writes
//! the frame back, leaving the output field unpopulated.
//!
//! # Example
//!
//! ```no_run
//! use timestring_core::{params::AddTimeString, PipelineBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PipelineBuilder::new().report_timing(true).build()?;
//! let report = pipeline.run(&AddTimeString {
//!     table: "data/city.gpkg/permits".to_string(),
//!     input_field: "CreatedDT".to_string(),
//!     new_field: "CreatedDT_str".to_string(),
//!     time_format: "%Y-%m-%d".to_string(),
//! })?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::{debug, info, warn};

use crate::{
    db::Database,
    error::{Result, TimeStringError},
    models::{FieldSpec, PipelineStep, RunReport, StepTiming, TableRef},
    params::{AddTimeString, PipelineConfig},
};

pub mod builder;
pub mod format;
pub mod namer;
pub mod provision;

#[cfg(test)]
mod tests;

pub use builder::PipelineBuilder;
pub use format::format_column;
pub use namer::unique_name;
pub use provision::ensure_field;

/// Configured entry point for adding a time string field.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub(crate) fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Adds a text field holding `input_field` formatted with `time_format`.
    ///
    /// # Errors
    ///
    /// Returns the first host-level error. Formatting failures are reported
    /// through [`RunReport::format_error`] instead.
    pub fn run(&self, params: &AddTimeString) -> Result<RunReport> {
        let mut timings = Vec::new();

        let (table_ref, mut db) = self.timed(PipelineStep::Resolve, &mut timings, || {
            Self::resolve(params)
        })?;
        let table = table_ref.table.as_str();

        let output_field = self.timed(PipelineStep::Name, &mut timings, || {
            self.output_name(&db, table, params)
        })?;

        let join_field = self.config.join_field.as_str();
        if join_field.eq_ignore_ascii_case(&params.input_field)
            || join_field.eq_ignore_ascii_case(&output_field)
        {
            return Err(TimeStringError::Configuration {
                message: format!("join field '{join_field}' clashes with a selected field"),
            });
        }

        let spec = FieldSpec::text(&output_field).with_length(self.config.field_length);
        let field_created = self.timed(PipelineStep::Provision, &mut timings, || {
            ensure_field(&db, table, &spec)
        })?;

        let (primary_key, mut frame) = self.timed(PipelineStep::Extract, &mut timings, || {
            info!("Creating frame from input table");
            let primary_key = db.primary_key_field(table)?;
            let input = params.input_field.as_str();
            let mut frame = db.extract_decoding(table, &[input, output_field.as_str()], &[input])?;
            frame.insert_index_column(join_field)?;
            Ok::<_, TimeStringError>((primary_key, frame))
        })?;
        let rows_extracted = frame.len();

        let format_error = self.timed(PipelineStep::Format, &mut timings, || {
            info!("Creating new text column based on field {}", params.input_field);
            match format_column(&mut frame, &params.input_field, &output_field, &params.time_format) {
                Ok(rows) => {
                    info!("Formatted {rows} values");
                    None
                }
                Err(e) => {
                    warn!(
                        "Could not process datetime field. Check the values of '{}' and the time format '{}': {e}",
                        params.input_field, params.time_format
                    );
                    Some(e)
                }
            }
        });

        let write = self.timed(PipelineStep::Write, &mut timings, || {
            info!("Joining new time string field to table");
            db.extend_table(table, &primary_key, &frame, join_field)
        })?;
        info!("Completed {}", table_ref);

        Ok(RunReport {
            table: params.table.clone(),
            input_field: params.input_field.clone(),
            output_field,
            field_created,
            rows_extracted,
            write,
            format_error,
            timings,
        })
    }

    fn resolve(params: &AddTimeString) -> Result<(TableRef, Database)> {
        let table_ref: TableRef = params.table.parse()?;
        if params.input_field.trim().is_empty() {
            return Err(TimeStringError::invalid_input("input_field")
                .with_reason("input field name must not be empty"));
        }

        let db = Database::open(&table_ref.workspace)?;
        if !db.table_exists(&table_ref.table)? {
            return Err(TimeStringError::TableNotFound {
                table: table_ref.to_string(),
            });
        }
        Ok((table_ref, db))
    }

    fn output_name(&self, db: &Database, table: &str, params: &AddTimeString) -> Result<String> {
        let desired = if self.config.validate_names {
            Database::validate_field_name(&params.new_field)
        } else {
            params.new_field.clone()
        };

        let name = if self.config.overwrite_output {
            desired
        } else {
            unique_name(&desired, self.config.max_name_attempts, |candidate| {
                db.field_exists(table, candidate)
            })?
        };

        if name.eq_ignore_ascii_case(&params.input_field) {
            return Err(TimeStringError::invalid_input("new_field")
                .with_reason(format!("'{name}' is the input field")));
        }
        debug!("Output field: {name}");
        Ok(name)
    }

    /// Runs one step, recording its timing when enabled.
    fn timed<T>(&self, step: PipelineStep, timings: &mut Vec<StepTiming>, f: impl FnOnce() -> T) -> T {
        if !self.config.report_timing {
            return f();
        }

        let started_at = Timestamp::now();
        debug!("{step} start: {started_at}");
        let result = f();
        let finished_at = Timestamp::now();
        debug!("{step} end: {finished_at}");

        timings.push(StepTiming {
            step,
            started_at,
            finished_at,
        });
        result
    }
}
