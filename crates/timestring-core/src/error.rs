//! Error types for the timestring library.
//!
//! Errors come in two tiers. [`TimeStringError`] covers host-level failures
//! (the table store refused an operation, a table or field is missing, the
//! join key does not line up) and aborts a run. [`FormatError`] covers a
//! failed formatting step; the pipeline reports it and keeps going.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Host-level error type for all table operations.
#[derive(Error, Debug)]
pub enum TimeStringError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Table not found in the workspace
    #[error("Table '{table}' not found")]
    TableNotFound { table: String },
    /// Field not found on the given table
    #[error("Field '{field}' not found on table '{table}'")]
    FieldNotFound { table: String, field: String },
    /// The in-memory frame could not be joined back onto the table
    #[error("Join key error on field '{field}': {reason}")]
    JoinKey { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TimeStringError {
        TimeStringError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimeStringError {
        TimeStringError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimeStringError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a join key error for the given frame column.
    pub fn join_key(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::JoinKey {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TimeStringError::database(message).with_source(e))
    }
}

/// A failed formatting step.
///
/// `key` is the primary key of the first row that could not be formatted, or
/// `None` when the failure is not tied to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatError {
    pub key: Option<i64>,
    pub reason: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "could not format row {key}: {}", self.reason),
            None => write!(f, "could not format column: {}", self.reason),
        }
    }
}

impl std::error::Error for FormatError {}

impl FormatError {
    /// Creates a formatting error for a specific row.
    pub fn at_row(key: i64, reason: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            reason: reason.into(),
        }
    }

    /// Creates a formatting error for the column as a whole.
    pub fn column(reason: impl Into<String>) -> Self {
        Self {
            key: None,
            reason: reason.into(),
        }
    }
}

/// Result type alias for host-level operations
pub type Result<T> = std::result::Result<T, TimeStringError>;
