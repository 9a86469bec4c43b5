use super::row::Row;
use crate::engine::types::ScalarValue;

#[test]
fn keeps_insertion_order() {
    let row = Row::from_pairs([
        ("salary", ScalarValue::from("low")),
        ("Department", ScalarValue::from("IT")),
        ("number_project", ScalarValue::Int64(3)),
    ]);
    let names: Vec<&str> = row.field_names().collect();
    assert_eq!(names, vec!["salary", "Department", "number_project"]);
}

#[test]
fn absent_fields_read_as_null() {
    let row = Row::from_pairs([("left", 1i64)]);
    assert_eq!(row.value("left"), &ScalarValue::Int64(1));
    assert_eq!(row.value("missing"), &ScalarValue::Null);
    assert_eq!(row.get("missing"), None);
    assert_eq!(row.get_f64("left"), Some(1.0));
}

#[test]
fn remove_preserves_remaining_order() {
    let mut row = Row::from_pairs([("a", 1i64), ("b", 2i64), ("c", 3i64)]);
    assert_eq!(row.remove("a"), Some(ScalarValue::Int64(1)));
    let names: Vec<&str> = row.field_names().collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn project_skips_missing_fields() {
    let row = Row::from_pairs([("last_evaluation", 0.9f64), ("satisfaction_level", 0.4f64)]);
    let projected = row.project(&[
        "last_evaluation".to_string(),
        "nope".to_string(),
        "satisfaction_level".to_string(),
    ]);
    assert_eq!(projected.len(), 2);
    assert_eq!(projected.get_index(0).unwrap().0, "last_evaluation");
}
