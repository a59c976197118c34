use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

/// Helper function to create a GeoPackage-style workspace holding a
/// `permits` feature table with three dated rows.
pub fn create_test_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let workspace = temp_dir.path().join("city.gpkg");
    let conn = Connection::open(&workspace).expect("Failed to create workspace");
    conn.execute_batch(
        "CREATE TABLE permits (
            fid INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            geom POINT,
            name TEXT,
            CreatedDT DATETIME
        );
        INSERT INTO permits (fid, name, CreatedDT) VALUES
            (1, 'north', '2021-03-04 10:15:00'),
            (2, 'south', '2019-12-31T23:59:59'),
            (5, 'east', '2020-02-29');",
    )
    .expect("Failed to create permits table");
    (temp_dir, workspace)
}

/// Table identifier for the `permits` table of a workspace.
pub fn permits(workspace: &Path) -> String {
    workspace.join("permits").to_str().unwrap().to_string()
}

/// Reads one text column of a table ordered by primary key.
pub fn read_column(workspace: &Path, table: &str, column: &str) -> Vec<Option<String>> {
    let conn = Connection::open(workspace).expect("Failed to open workspace");
    let mut stmt = conn
        .prepare(&format!("SELECT \"{column}\" FROM \"{table}\" ORDER BY rowid"))
        .expect("Failed to prepare query");
    stmt.query_map([], |row| row.get(0))
        .expect("Failed to query column")
        .collect::<rusqlite::Result<_>>()
        .expect("Failed to read column")
}

/// Runs SQL against a workspace.
pub fn execute(workspace: &Path, sql: &str) {
    let conn = Connection::open(workspace).expect("Failed to open workspace");
    conn.execute_batch(sql).expect("Failed to execute SQL");
}
