//! Table to frame extraction.

use log::debug;
use rusqlite::types::Type;

use crate::{
    error::{DatabaseResultExt, Result, TimeStringError},
    models::{CellValue, Frame},
};

impl super::Database {
    /// Reads the primary key plus the given fields of every row into a frame.
    ///
    /// Rows come back ordered by primary key and every row of the table is
    /// present. Columns are named as requested. Values are kept as stored,
    /// except that text in datetime-typed fields is decoded into datetimes.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::TableNotFound` or
    /// `TimeStringError::FieldNotFound` when the table or a field is missing.
    pub fn extract(&self, table: &str, fields: &[&str]) -> Result<Frame> {
        self.extract_decoding(table, fields, fields)
    }

    /// Like [`extract`](Self::extract), but only fields named in `decoded`
    /// have their datetime text decoded. Every other field is read exactly as
    /// stored, so writing it back leaves the stored text unchanged.
    pub fn extract_decoding(&self, table: &str, fields: &[&str], decoded: &[&str]) -> Result<Frame> {
        let descriptors = self.list_fields(table)?;
        let field_types = fields
            .iter()
            .map(|name| {
                let field = descriptors
                    .iter()
                    .find(|field| field.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| TimeStringError::FieldNotFound {
                        table: table.to_string(),
                        field: name.to_string(),
                    })?;
                let decode = decoded.iter().any(|d| d.eq_ignore_ascii_case(name));
                Ok(decode.then_some(field.field_type))
            })
            .collect::<Result<Vec<_>>>()?;

        let primary_key = Self::quote_identifier(&self.primary_key_field(table)?);
        let columns = std::iter::once(primary_key.clone())
            .chain(fields.iter().map(|name| Self::quote_identifier(name)))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {columns} FROM {} ORDER BY {primary_key}",
            Self::quote_identifier(table)
        );
        debug!("Extracting: {sql}");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare extraction query")?;

        let rows = stmt
            .query_map([], |row| {
                let key: i64 = row.get(0)?;
                let values = field_types
                    .iter()
                    .enumerate()
                    .map(|(i, field_type)| {
                        let idx = i + 1;
                        let value = row.get_ref(idx)?;
                        let value = match field_type {
                            Some(field_type) => CellValue::from_sql(value, *field_type),
                            None => CellValue::stored(value),
                        };
                        value.map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
                        })
                    })
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok((key, values))
            })
            .db_context("Failed to query table rows")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read table rows")?;

        let mut index = Vec::with_capacity(rows.len());
        let mut columns: Vec<Vec<CellValue>> = fields
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for (key, values) in rows {
            index.push(key);
            for (column, value) in columns.iter_mut().zip(values) {
                column.push(value);
            }
        }

        let mut frame = Frame::new(index);
        for (name, values) in fields.iter().zip(columns) {
            frame.insert_column(*name, values)?;
        }
        debug!("Extracted {} rows from '{table}'", frame.len());
        Ok(frame)
    }
}
