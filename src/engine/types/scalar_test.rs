use serde_json::json;

use crate::engine::types::{LogicalType, ScalarValue};

#[test]
fn from_json_maps_flat_values() {
    assert_eq!(ScalarValue::from_json(&json!(null)), Some(ScalarValue::Null));
    assert_eq!(
        ScalarValue::from_json(&json!(true)),
        Some(ScalarValue::Boolean(true))
    );
    assert_eq!(ScalarValue::from_json(&json!(7)), Some(ScalarValue::Int64(7)));
    assert_eq!(
        ScalarValue::from_json(&json!(0.25)),
        Some(ScalarValue::Float64(0.25))
    );
    assert_eq!(
        ScalarValue::from_json(&json!("IT")),
        Some(ScalarValue::Utf8("IT".into()))
    );
}

#[test]
fn from_json_rejects_nested_values() {
    assert_eq!(ScalarValue::from_json(&json!([1, 2])), None);
    assert_eq!(ScalarValue::from_json(&json!({ "a": 1 })), None);
}

#[test]
fn numeric_views_coerce_across_representations() {
    assert_eq!(ScalarValue::Float64(3.0).as_i64(), Some(3));
    assert_eq!(ScalarValue::Float64(3.5).as_i64(), None);
    assert_eq!(ScalarValue::Float64(1e20).as_i64(), None);
    assert_eq!(ScalarValue::Float64(-1e20).as_i64(), None);
    assert_eq!(ScalarValue::Float64(f64::INFINITY).as_i64(), None);
    assert_eq!(ScalarValue::Utf8(" 42 ".into()).as_i64(), Some(42));
    assert_eq!(ScalarValue::Int64(-1).as_u64(), None);
    assert_eq!(ScalarValue::Boolean(true).as_f64(), Some(1.0));
    assert_eq!(ScalarValue::Utf8("n/a".into()).as_f64(), None);
    assert_eq!(ScalarValue::Float64(f64::NAN).as_f64(), None);
    assert_eq!(ScalarValue::Null.as_f64(), None);
}

#[test]
fn flags_read_as_booleans() {
    assert_eq!(ScalarValue::Int64(1).as_bool(), Some(true));
    assert_eq!(ScalarValue::Int64(0).as_bool(), Some(false));
    assert_eq!(ScalarValue::Int64(2).as_bool(), None);
    assert_eq!(ScalarValue::Utf8("TRUE".into()).as_bool(), Some(true));
}

#[test]
fn loose_equality_ignores_numeric_representation() {
    assert!(ScalarValue::Int64(1).loosely_equals(&ScalarValue::Float64(1.0)));
    assert!(ScalarValue::from("low").loosely_equals(&ScalarValue::from("low")));
    assert!(!ScalarValue::from("1").loosely_equals(&ScalarValue::Int64(1)));
    assert!(!ScalarValue::Null.loosely_equals(&ScalarValue::Int64(0)));
}

#[test]
fn display_and_logical_type() {
    assert_eq!(ScalarValue::Int64(5).to_string(), "5");
    assert_eq!(ScalarValue::from("sales").to_string(), "sales");
    assert_eq!(ScalarValue::Null.to_string(), "null");
    assert_eq!(ScalarValue::Float64(0.5).logical_type(), LogicalType::Float);
    assert_eq!(LogicalType::String.to_string(), "String");
}

#[test]
fn serializes_as_plain_json() {
    let out = serde_json::to_string(&vec![
        ScalarValue::Int64(1),
        ScalarValue::from("x"),
        ScalarValue::Null,
    ])
    .unwrap();
    assert_eq!(out, r#"[1,"x",null]"#);
}
