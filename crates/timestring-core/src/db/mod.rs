//! SQLite table store access.
//!
//! This module wraps a connection to a workspace (a SQLite or GeoPackage file)
//! and provides the field management and table I/O primitives the pipeline is
//! built from: listing and adding fields, extracting a table into a
//! [`Frame`](crate::models::Frame), and extending a table from one.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::{DatabaseResultExt, Result, TimeStringError};

pub mod extend;
pub mod extract;
pub mod schema;
pub mod utils;

pub use extend::ExtendSummary;

/// Connection to a workspace.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens an existing workspace for reading and writing.
    ///
    /// The file is never created: a missing workspace is reported as
    /// `TimeStringError::FileSystem`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        std::fs::metadata(path).map_err(|e| TimeStringError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .db_context("Failed to open workspace")?;

        Ok(Self { connection })
    }

    /// Opens a private in-memory workspace.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory workspace")?;
        Ok(Self { connection })
    }

    /// Runs a batch of SQL statements against the workspace.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .db_context("Failed to execute SQL batch")
    }
}
