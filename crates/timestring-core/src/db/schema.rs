//! Field listing and field creation.

use log::debug;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result, TimeStringError},
    models::{FieldDescriptor, FieldSpec, FieldType},
};

const TABLE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE)";
const TABLE_INFO_SQL: &str =
    "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid";

/// Name of SQLite's implicit integer key, used when a table declares none.
pub const ROWID: &str = "rowid";

impl super::Database {
    /// Returns whether the workspace holds a table with this name.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        self.connection
            .query_row(TABLE_EXISTS_SQL, params![table], |row| row.get(0))
            .db_context("Failed to check table existence")
    }

    /// Lists the fields of a table in column order.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::TableNotFound` if the table does not exist.
    pub fn list_fields(&self, table: &str) -> Result<Vec<FieldDescriptor>> {
        if !self.table_exists(table)? {
            return Err(TimeStringError::TableNotFound {
                table: table.to_string(),
            });
        }

        let mut stmt = self
            .connection
            .prepare(TABLE_INFO_SQL)
            .db_context("Failed to prepare table info query")?;

        let fields = stmt
            .query_map(params![table], |row| {
                let declared_type: String = row.get(1)?;
                Ok(FieldDescriptor {
                    name: row.get(0)?,
                    field_type: FieldType::from_declared(&declared_type),
                    declared_type,
                    nullable: row.get::<_, i64>(2)? == 0,
                    primary_key: row.get::<_, i64>(3)? > 0,
                })
            })
            .db_context("Failed to query table info")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read table info")?;

        Ok(fields)
    }

    /// Looks a field up by name. Field names compare case-insensitively, as
    /// SQLite does.
    pub fn find_field(&self, table: &str, name: &str) -> Result<Option<FieldDescriptor>> {
        Ok(self
            .list_fields(table)?
            .into_iter()
            .find(|field| field.name.eq_ignore_ascii_case(name)))
    }

    /// Returns whether a field of this name exists on the table.
    pub fn field_exists(&self, table: &str, name: &str) -> Result<bool> {
        Ok(self.find_field(table, name)?.is_some())
    }

    /// Returns the name of the table's integer primary key.
    ///
    /// Tables without a single integer primary key column are keyed by
    /// [`ROWID`].
    pub fn primary_key_field(&self, table: &str) -> Result<String> {
        let fields = self.list_fields(table)?;
        let mut keys = fields.iter().filter(|field| field.primary_key);

        let name = match (keys.next(), keys.next()) {
            (Some(key), None) if key.declared_type.eq_ignore_ascii_case("INTEGER") => {
                key.name.clone()
            }
            _ => ROWID.to_string(),
        };
        debug!("Primary key of '{table}' is '{name}'");
        Ok(name)
    }

    /// Adds a field to a table.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::InvalidInput` for non-nullable fields, which
    /// SQLite can only add with a default value, and
    /// `TimeStringError::Database` if the table store rejects the change.
    pub fn add_field(&self, table: &str, spec: &FieldSpec) -> Result<()> {
        let sql = Self::add_field_sql(table, spec)?;
        debug!("Adding field: {sql}");
        self.connection
            .execute(&sql, [])
            .db_context(&format!("Failed to add field '{}' to '{table}'", spec.name))?;
        Ok(())
    }

    pub(super) fn add_field_sql(table: &str, spec: &FieldSpec) -> Result<String> {
        if !spec.nullable {
            return Err(TimeStringError::invalid_input(&spec.name)
                .with_reason("non-nullable fields cannot be added to a populated table"));
        }

        Ok(format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            Self::quote_identifier(table),
            Self::quote_identifier(&spec.name),
            spec.field_type.sql_type(spec.length)
        ))
    }
}
