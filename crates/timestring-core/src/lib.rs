//! Core library for the timestring tool.
//!
//! Adds a text field to a feature table holding the values of a datetime
//! field formatted with a strftime-style pattern. Tables live in SQLite
//! workspaces, which includes GeoPackage files.
//!
//! # Quick Start
//!
//! ```no_run
//! use timestring_core::{params::AddTimeString, PipelineBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PipelineBuilder::new().build()?;
//! let report = pipeline.run(&AddTimeString {
//!     table: "data/city.gpkg/permits".to_string(),
//!     input_field: "CreatedDT".to_string(),
//!     new_field: "CreatedDT_str".to_string(),
//!     time_format: "%Y-%m-%d".to_string(),
//! })?;
//!
//! if let Some(error) = &report.format_error {
//!     eprintln!("{} left unpopulated: {error}", report.output_field);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod pipeline;

// Re-export commonly used types
pub use db::{Database, ExtendSummary};
pub use display::{LocalTime, OperationStatus};
pub use error::{FormatError, Result, TimeStringError};
pub use models::{
    CellValue, Column, FieldDescriptor, FieldSpec, FieldType, Frame, PipelineStep, RunReport,
    StepTiming, TableRef,
};
pub use params::{AddTimeString, PipelineConfig};
pub use pipeline::{Pipeline, PipelineBuilder};
