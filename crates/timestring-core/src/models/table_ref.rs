//! Table identifiers.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::TimeStringError;

/// A table inside a workspace.
///
/// Identifiers are written as a path whose last component names the table and
/// whose parent is the workspace (the SQLite or GeoPackage file), e.g.
/// `data/roads.gpkg/roads`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub workspace: PathBuf,
    pub table: String,
}

impl TableRef {
    /// Creates a reference from its parts.
    pub fn new(workspace: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            table: table.into(),
        }
    }
}

impl FromStr for TableRef {
    type Err = TimeStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = Path::new(s);
        let table = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                TimeStringError::invalid_input("table")
                    .with_reason(format!("'{s}' does not name a table"))
            })?;
        let workspace = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| {
                TimeStringError::invalid_input("table")
                    .with_reason(format!("'{s}' has no workspace, expected <database>/<table>"))
            })?;

        Ok(Self::new(workspace, table))
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.workspace.join(&self.table).display())
    }
}
