//! Data models for feature tables and the in-memory frame.
//!
//! - [`field`]: field types, descriptors and creation requests
//! - [`value`]: a single attribute value held in memory
//! - [`frame`]: the primary-key indexed frame a table is extracted into
//! - [`table_ref`]: parsed `<workspace>/<table>` identifiers
//! - [`report`]: the outcome of a pipeline run

pub mod field;
pub mod frame;
pub mod report;
pub mod table_ref;
pub mod value;

pub use field::{FieldDescriptor, FieldSpec, FieldType};
pub use frame::{Column, Frame};
pub use report::{PipelineStep, RunReport, StepTiming};
pub use table_ref::TableRef;
pub use value::CellValue;
