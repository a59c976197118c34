//! Joining a frame back onto its table.

use log::{debug, info};
use rusqlite::ToSql;
use serde::Serialize;

use super::schema::ROWID;
use crate::{
    error::{DatabaseResultExt, Result, TimeStringError},
    models::{CellValue, Column, FieldSpec, FieldType, Frame},
};

/// Outcome of extending a table from a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtendSummary {
    /// Frame rows whose key matched a table row
    pub rows_matched: usize,
    /// Frame rows whose key is no longer in the table
    pub rows_unmatched: usize,
    /// Joined columns that had to be added to the table
    pub columns_added: usize,
}

impl super::Database {
    /// Extends a table with the columns of a frame, joined on
    /// `primary_key_field = frame[join_key_field]`.
    ///
    /// Every frame column other than the join key is written. Columns the
    /// table lacks are added first. Matching rows have the joined columns
    /// overwritten, table rows without a matching key are left alone, and
    /// nothing is deleted. The whole change runs in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `TimeStringError::JoinKey` if the join key column is missing or
    /// holds non-integer values, and `TimeStringError::FieldNotFound` if the
    /// table has no field named `primary_key_field`.
    pub fn extend_table(
        &mut self,
        table: &str,
        primary_key_field: &str,
        frame: &Frame,
        join_key_field: &str,
    ) -> Result<ExtendSummary> {
        let keys = Self::join_keys(frame, join_key_field)?;

        let fields = self.list_fields(table)?;
        let has_field = |name: &str| fields.iter().any(|f| f.name.eq_ignore_ascii_case(name));
        if !primary_key_field.eq_ignore_ascii_case(ROWID) && !has_field(primary_key_field) {
            return Err(TimeStringError::FieldNotFound {
                table: table.to_string(),
                field: primary_key_field.to_string(),
            });
        }

        let joined: Vec<&Column> = frame
            .columns()
            .iter()
            .filter(|column| column.name != join_key_field)
            .collect();
        if joined.is_empty() {
            info!("No columns to join onto '{table}'");
            return Ok(ExtendSummary::default());
        }

        let new_fields = joined
            .iter()
            .filter(|column| !has_field(&column.name))
            .map(|column| Self::add_field_sql(table, &Self::infer_field(column)))
            .collect::<Result<Vec<_>>>()?;

        let assignments = joined
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", Self::quote_identifier(&column.name), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let update_sql = format!(
            "UPDATE {} SET {assignments} WHERE {} = ?{}",
            Self::quote_identifier(table),
            Self::quote_identifier(primary_key_field),
            joined.len() + 1
        );
        debug!("Extending: {update_sql}");

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for sql in &new_fields {
            tx.execute(sql, [])
                .db_context("Failed to add joined field")?;
        }

        let mut summary = ExtendSummary {
            columns_added: new_fields.len(),
            ..ExtendSummary::default()
        };
        {
            let mut stmt = tx
                .prepare(&update_sql)
                .db_context("Failed to prepare join update")?;

            for (row, key) in keys.iter().enumerate() {
                let mut values: Vec<&dyn ToSql> = joined
                    .iter()
                    .map(|column| &column.values[row] as &dyn ToSql)
                    .collect();
                values.push(key);

                let updated = stmt
                    .execute(&*values)
                    .db_context("Failed to write joined row")?;
                if updated == 0 {
                    summary.rows_unmatched += 1;
                } else {
                    summary.rows_matched += 1;
                }
            }
        }

        tx.commit().db_context("Failed to commit join")?;
        debug!("Join onto '{table}': {summary:?}");
        Ok(summary)
    }

    fn join_keys(frame: &Frame, join_key_field: &str) -> Result<Vec<i64>> {
        let column = frame
            .column(join_key_field)
            .ok_or_else(|| TimeStringError::join_key(join_key_field, "missing from frame"))?;

        column
            .values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.as_integer().ok_or_else(|| {
                    TimeStringError::join_key(
                        join_key_field,
                        format!("row {row} holds a {} value, expected an integer", value.kind()),
                    )
                })
            })
            .collect()
    }

    fn infer_field(column: &Column) -> FieldSpec {
        let field_type = column
            .values
            .iter()
            .find_map(CellValue::field_type)
            .unwrap_or(FieldType::Text);
        FieldSpec::new(&column.name, field_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn parcels_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE parcels (fid INTEGER PRIMARY KEY, owner TEXT, label TEXT);
             INSERT INTO parcels VALUES (1, 'ann', NULL), (2, 'bo', 'old'), (3, 'cy', 'keep');",
        )
        .unwrap();
        db
    }

    fn label_frame(keys: Vec<i64>, labels: &[&str]) -> Frame {
        let mut frame = Frame::new(keys);
        frame
            .insert_column(
                "label",
                labels.iter().map(|l| CellValue::Text(l.to_string())).collect(),
            )
            .unwrap();
        frame.insert_index_column("join").unwrap();
        frame
    }

    fn labels(db: &Database) -> Vec<Option<String>> {
        let mut stmt = db
            .connection
            .prepare("SELECT label FROM parcels ORDER BY fid")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_extend_overwrites_matching_rows_only() {
        let mut db = parcels_db();
        let frame = label_frame(vec![1, 2], &["new-1", "new-2"]);

        let summary = db.extend_table("parcels", "fid", &frame, "join").unwrap();

        assert_eq!(summary.rows_matched, 2);
        assert_eq!(summary.rows_unmatched, 0);
        assert_eq!(summary.columns_added, 0);
        assert_eq!(
            labels(&db),
            [
                Some("new-1".to_string()),
                Some("new-2".to_string()),
                Some("keep".to_string())
            ]
        );
    }

    #[test]
    fn test_extend_skips_unknown_keys() {
        let mut db = parcels_db();
        let frame = label_frame(vec![3, 42], &["x", "y"]);

        let summary = db.extend_table("parcels", "fid", &frame, "join").unwrap();

        assert_eq!(summary.rows_matched, 1);
        assert_eq!(summary.rows_unmatched, 1);
        let count: i64 = db
            .connection
            .query_row("SELECT COUNT(*) FROM parcels", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_extend_adds_missing_columns() {
        let mut db = parcels_db();
        let mut frame = Frame::new(vec![1, 2, 3]);
        frame
            .insert_column("area", vec![CellValue::Null, CellValue::Real(2.5), CellValue::Null])
            .unwrap();
        frame.insert_index_column("join").unwrap();

        let summary = db.extend_table("parcels", "fid", &frame, "join").unwrap();

        assert_eq!(summary.columns_added, 1);
        let field = db.find_field("parcels", "area").unwrap().unwrap();
        assert_eq!(field.field_type, FieldType::Double);
    }

    #[test]
    fn test_extend_without_joined_columns_is_noop() {
        let mut db = parcels_db();
        let mut frame = Frame::new(vec![1, 2, 3]);
        frame.insert_index_column("join").unwrap();

        let summary = db.extend_table("parcels", "fid", &frame, "join").unwrap();
        assert_eq!(summary, ExtendSummary::default());
    }

    #[test]
    fn test_extend_rejects_bad_join_keys() {
        let mut db = parcels_db();
        let mut frame = label_frame(vec![1], &["x"]);
        frame
            .insert_column("join", vec![CellValue::Text("1".into())])
            .unwrap();

        let err = db.extend_table("parcels", "fid", &frame, "join").unwrap_err();
        assert!(matches!(err, TimeStringError::JoinKey { .. }));

        let err = db
            .extend_table("parcels", "fid", &frame, "missing")
            .unwrap_err();
        assert!(matches!(err, TimeStringError::JoinKey { .. }));
    }

    #[test]
    fn test_extend_rejects_unknown_primary_key() {
        let mut db = parcels_db();
        let frame = label_frame(vec![1], &["x"]);
        let err = db.extend_table("parcels", "gid", &frame, "join").unwrap_err();
        assert!(matches!(err, TimeStringError::FieldNotFound { .. }));
    }
}
