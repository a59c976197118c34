//! Tests for the pipeline module.

use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::models::CellValue;

/// Helper function to create a workspace with an `events` table
fn create_test_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let workspace = temp_dir.path().join("events.sqlite");
    std::fs::File::create(&workspace).expect("Failed to create workspace");

    let db = Database::open(&workspace).expect("Failed to open workspace");
    db.execute_batch(
        "CREATE TABLE events (fid INTEGER PRIMARY KEY, kind TEXT, StartDT DATETIME);
         INSERT INTO events VALUES (1, 'a', '2024-07-01 08:00:00'), (2, 'b', '2024-07-02 09:30:00');",
    )
    .expect("Failed to create events table");
    (temp_dir, workspace)
}

fn params(workspace: &std::path::Path, new_field: &str) -> AddTimeString {
    AddTimeString {
        table: workspace.join("events").to_str().unwrap().to_string(),
        input_field: "StartDT".to_string(),
        new_field: new_field.to_string(),
        time_format: "%H:%M".to_string(),
    }
}

fn column(workspace: &std::path::Path, name: &str) -> Vec<CellValue> {
    let db = Database::open(workspace).expect("Failed to open workspace");
    let frame = db.extract("events", &[name]).expect("Failed to extract");
    frame.column(name).unwrap().values.clone()
}

#[test]
fn test_builder_rejects_empty_join_field() {
    let err = PipelineBuilder::new().with_join_field(" ").build().unwrap_err();
    assert!(matches!(err, TimeStringError::Configuration { .. }));

    let err = PipelineBuilder::new().with_field_length(Some(0)).build().unwrap_err();
    assert!(matches!(err, TimeStringError::Configuration { .. }));
}

#[test]
fn test_builder_applies_settings() {
    let pipeline = PipelineBuilder::new()
        .with_max_name_attempts(5)
        .with_join_field("key")
        .overwrite_output(true)
        .validate_names(false)
        .with_field_length(Some(20))
        .report_timing(true)
        .build()
        .unwrap();

    let config = pipeline.config();
    assert_eq!(config.max_name_attempts, 5);
    assert_eq!(config.join_field, "key");
    assert!(config.overwrite_output);
    assert!(!config.validate_names);
    assert_eq!(config.field_length, Some(20));
    assert!(config.report_timing);
}

#[test]
fn test_desired_name_is_validated_before_suffixing() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().build().unwrap();

    let report = pipeline.run(&params(&workspace, "start time")).unwrap();
    assert_eq!(report.output_field, "start_time");

    let report = pipeline.run(&params(&workspace, "start-time")).unwrap();
    assert_eq!(report.output_field, "start_time_1");
}

#[test]
fn test_validation_can_be_disabled() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().validate_names(false).build().unwrap();

    let report = pipeline.run(&params(&workspace, "start time")).unwrap();
    assert_eq!(report.output_field, "start time");
    assert_eq!(
        column(&workspace, "start time"),
        [CellValue::Text("08:00".into()), CellValue::Text("09:30".into())]
    );
}

#[test]
fn test_overwrite_reuses_existing_field() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().overwrite_output(true).build().unwrap();

    let report = pipeline.run(&params(&workspace, "kind")).unwrap();

    assert_eq!(report.output_field, "kind");
    assert!(!report.field_created);
    assert_eq!(
        column(&workspace, "kind"),
        [CellValue::Text("08:00".into()), CellValue::Text("09:30".into())]
    );
}

#[test]
fn test_output_equal_to_input_is_rejected() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().overwrite_output(true).build().unwrap();

    let err = pipeline.run(&params(&workspace, "startdt")).unwrap_err();
    assert!(matches!(err, TimeStringError::InvalidInput { .. }));
}

#[test]
fn test_join_field_clash_is_rejected() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().with_join_field("StartDT").build().unwrap();

    let err = pipeline.run(&params(&workspace, "label")).unwrap_err();
    assert!(matches!(err, TimeStringError::Configuration { .. }));

    let db = Database::open(&workspace).unwrap();
    assert!(!db.field_exists("events", "label").unwrap());
}

#[test]
fn test_field_length_is_applied() {
    let (_temp_dir, workspace) = create_test_workspace();
    let pipeline = PipelineBuilder::new().with_field_length(Some(8)).build().unwrap();

    pipeline.run(&params(&workspace, "label")).unwrap();

    let db = Database::open(&workspace).unwrap();
    let field = db.find_field("events", "label").unwrap().unwrap();
    assert_eq!(field.declared_type, "TEXT(8)");
}

#[test]
fn test_empty_input_field_is_rejected() {
    let (_temp_dir, workspace) = create_test_workspace();
    let mut params = params(&workspace, "label");
    params.input_field = String::new();

    let err = PipelineBuilder::new().build().unwrap().run(&params).unwrap_err();
    assert!(matches!(err, TimeStringError::InvalidInput { .. }));
}

#[test]
fn test_timings_disabled_by_default() {
    let (_temp_dir, workspace) = create_test_workspace();
    let report = PipelineBuilder::new()
        .build()
        .unwrap()
        .run(&params(&workspace, "label"))
        .unwrap();
    assert!(report.timings.is_empty());
}
