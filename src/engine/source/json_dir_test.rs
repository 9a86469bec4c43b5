use std::fs;

use tempfile::tempdir;

use crate::engine::errors::PipelineError;
use crate::engine::source::{JsonDirLoader, SourceLoader};
use crate::engine::types::ScalarValue;

#[test]
fn loads_array_of_objects_in_field_order() {
    let dir = tempdir().expect("temp dir failed");
    fs::write(
        dir.path().join("A_office_data.json"),
        r#"[{"employee_office_id": 3, "Department": "IT", "salary": "low"},
            {"employee_office_id": 4, "Department": "sales", "salary": null}]"#,
    )
    .unwrap();

    let loader = JsonDirLoader::new(dir.path()).with_file("a_office", "A_office_data.json");
    let rows = loader.load("a_office").unwrap();

    assert_eq!(rows.len(), 2);
    let names: Vec<&str> = rows[0].field_names().collect();
    assert_eq!(names, vec!["employee_office_id", "Department", "salary"]);
    assert_eq!(rows[1].value("salary"), &ScalarValue::Null);
}

#[test]
fn unmapped_source_reads_name_dot_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hr.json"), r#"[{"employee_id": "A1"}]"#).unwrap();
    let loader = JsonDirLoader::new(dir.path());
    assert_eq!(loader.load("hr").unwrap().len(), 1);
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempdir().unwrap();
    let loader = JsonDirLoader::new(dir.path());
    let err = loader.load("hr").unwrap_err();
    assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
}

#[test]
fn malformed_json_is_source_unavailable() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hr.json"), "[{").unwrap();
    let loader = JsonDirLoader::new(dir.path());
    assert!(matches!(
        loader.load("hr"),
        Err(PipelineError::SourceUnavailable { .. })
    ));
}

#[test]
fn nested_values_are_schema_errors() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("hr.json"),
        r#"[{"employee_id": "A1", "tags": ["x"]}]"#,
    )
    .unwrap();
    let loader = JsonDirLoader::new(dir.path());
    let err = loader.load("hr").unwrap_err();
    assert!(matches!(err, PipelineError::Schema { ref field, .. } if field == "tags"));
}
