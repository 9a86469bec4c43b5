use crate::engine::core::key::SourceTag;
use crate::engine::errors::PipelineError;
use crate::engine::types::ScalarValue;
use crate::engine::unify::{HrKeyConvention, OfficeIdRange};

fn range(tag: char, first: u64, last: u64, offset: u64) -> OfficeIdRange {
    OfficeIdRange {
        tag: SourceTag::new(tag).unwrap(),
        first,
        last,
        offset,
    }
}

#[test]
fn prefixed_parses_key_strings() {
    let key = HrKeyConvention::Prefixed
        .key_for("hr", 0, "employee_id", &ScalarValue::from("B7064"))
        .unwrap();
    assert_eq!(key.map(|k| k.to_string()), Some("B7064".to_string()));
}

#[test]
fn prefixed_rejects_bare_numbers() {
    let err = HrKeyConvention::Prefixed
        .key_for("hr", 2, "employee_id", &ScalarValue::Int64(7))
        .unwrap_err();
    assert!(matches!(err, PipelineError::Schema { row: Some(2), .. }));
}

#[test]
fn ranges_apply_offset() {
    let conv = HrKeyConvention::Ranges {
        ranges: vec![range('A', 1, 100, 0), range('B', 101, 200, 100)],
    };
    let key = conv
        .key_for("hr", 0, "employee_id", &ScalarValue::Int64(150))
        .unwrap()
        .unwrap();
    assert_eq!(key.to_string(), "B50");
    assert_eq!(
        conv.key_for("hr", 0, "employee_id", &ScalarValue::Int64(999))
            .unwrap(),
        None
    );
}

#[test]
fn ranges_reject_non_numeric_ids() {
    let conv = HrKeyConvention::Ranges {
        ranges: vec![range('A', 0, 10, 0)],
    };
    assert!(
        conv.key_for("hr", 0, "employee_id", &ScalarValue::from("A4"))
            .is_err()
    );
}

#[test]
fn validate_catches_overlaps_and_bad_offsets() {
    let overlapping = HrKeyConvention::Ranges {
        ranges: vec![range('A', 0, 100, 0), range('B', 50, 150, 50)],
    };
    assert!(overlapping.validate().is_err());

    let bad_offset = HrKeyConvention::Ranges {
        ranges: vec![range('A', 10, 20, 11)],
    };
    assert!(bad_offset.validate().is_err());

    assert!(HrKeyConvention::Prefixed.validate().is_ok());
}

#[test]
fn deserializes_from_tagged_table() {
    let conv: HrKeyConvention = serde_json::from_str(
        r#"{"mode": "ranges", "ranges": [{"tag": "A", "first": 1, "last": 9}]}"#,
    )
    .unwrap();
    assert_eq!(
        conv,
        HrKeyConvention::Ranges {
            ranges: vec![range('A', 1, 9, 0)]
        }
    );
    let prefixed: HrKeyConvention = serde_json::from_str(r#"{"mode": "prefixed"}"#).unwrap();
    assert_eq!(prefixed, HrKeyConvention::Prefixed);
}
