//! In-memory frame a table is extracted into.

use super::CellValue;
use crate::error::{Result, TimeStringError};

/// A named column of values, one per frame row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

/// Rows of a table indexed by primary key.
///
/// Every column holds exactly one value per index entry. Columns keep the
/// order they were inserted in; inserting a column under an existing name
/// replaces it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    index: Vec<i64>,
    columns: Vec<Column>,
}

impl Frame {
    /// Creates a frame with the given primary keys and no columns.
    pub fn new(index: Vec<i64>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Primary keys, in row order.
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Inserts or replaces a column.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::InvalidInput` if the number of values does not
    /// match the number of rows.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<CellValue>) -> Result<()> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(TimeStringError::invalid_input(name).with_reason(format!(
                "column has {} values but the frame has {} rows",
                values.len(),
                self.index.len()
            )));
        }

        match self.columns.iter_mut().find(|column| column.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(())
    }

    /// Adds a column holding a copy of the index, for use as a join key.
    pub fn insert_index_column(&mut self, name: impl Into<String>) -> Result<()> {
        let values = self.index.iter().copied().map(CellValue::Integer).collect();
        self.insert_column(name, values)
    }

    /// Removes and returns a column.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let position = self.columns.iter().position(|column| column.name == name)?;
        Some(self.columns.remove(position))
    }
}
