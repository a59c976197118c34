//! Display formatting for run outcomes.
//!
//! Domain types implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI renders to the terminal.
//!
//! - [`report`]: the [`RunReport`](crate::models::RunReport) summary
//! - [`status`]: one-line success or failure messages
//! - [`datetime`]: time of day in the system time zone

pub mod datetime;
pub mod report;
pub mod status;

pub use datetime::LocalTime;
pub use report::FORMAT_FAILURE_LABEL;
pub use status::{OperationStatus, SUCCESS_LABEL, WARNING_LABEL};
