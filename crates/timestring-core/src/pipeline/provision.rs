//! Output field provisioning.

use log::info;

use crate::{db::Database, error::Result, models::FieldSpec};

/// Makes sure a field named `spec.name` exists on the table.
///
/// This is a presence check only: an existing field of that name is accepted
/// whatever its type. Returns `true` when the field had to be added.
pub fn ensure_field(db: &Database, table: &str, spec: &FieldSpec) -> Result<bool> {
    if db.field_exists(table, &spec.name)? {
        info!("{} exists", spec.name);
        return Ok(false);
    }

    info!("Adding {}", spec.name);
    db.add_field(table, spec)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;

    fn events_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.execute_batch("CREATE TABLE events (fid INTEGER PRIMARY KEY, CreatedDT DATETIME, code INTEGER);")
            .unwrap();
        db
    }

    #[test]
    fn test_ensure_field_is_idempotent() {
        let db = events_db();
        let spec = FieldSpec::text("CreatedDT_str");

        assert!(ensure_field(&db, "events", &spec).unwrap());
        let after_first = db.list_fields("events").unwrap();

        assert!(!ensure_field(&db, "events", &spec).unwrap());
        assert_eq!(db.list_fields("events").unwrap(), after_first);
    }

    #[test]
    fn test_existing_field_of_other_type_is_accepted() {
        let db = events_db();
        assert!(!ensure_field(&db, "events", &FieldSpec::text("code")).unwrap());

        let field = db.find_field("events", "code").unwrap().unwrap();
        assert_eq!(field.field_type, FieldType::Long);
    }

    #[test]
    fn test_missing_table_propagates() {
        let db = events_db();
        assert!(ensure_field(&db, "rivers", &FieldSpec::text("x")).is_err());
    }
}
