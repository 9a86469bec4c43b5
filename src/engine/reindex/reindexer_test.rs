use crate::engine::core::key::{EmployeeKey, SourceTag};
use crate::engine::core::row::Row;
use crate::engine::errors::PipelineError;
use crate::engine::reindex::reindex;
use crate::engine::types::ScalarValue;
use crate::test_helpers::factories::OfficeRowsFactory;

fn tag(c: char) -> SourceTag {
    SourceTag::new(c).unwrap()
}

#[test]
fn keys_combine_tag_and_local_id() {
    let rows = OfficeRowsFactory::new().with_ids(&[4, 3033]).create();
    let table = reindex("a_office", &rows, tag('A'), "employee_office_id").unwrap();

    let keys: Vec<String> = table.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["A4", "A3033"]);
    assert_eq!(table.tag(), tag('A'));
    assert_eq!(table.source_name(), "a_office");
}

#[test]
fn same_local_id_in_both_offices_gives_distinct_keys() {
    let rows = OfficeRowsFactory::new().with_ids(&[3]).create();
    let a = reindex("a_office", &rows, tag('A'), "employee_office_id").unwrap();
    let b = reindex("b_office", &rows, tag('B'), "employee_office_id").unwrap();

    let a3: EmployeeKey = "A3".parse().unwrap();
    let b3: EmployeeKey = "B3".parse().unwrap();
    assert!(a.contains(&a3) && !a.contains(&b3));
    assert!(b.contains(&b3) && !b.contains(&a3));
}

#[test]
fn duplicate_local_id_is_rejected() {
    let rows = OfficeRowsFactory::new().with_ids(&[1, 2, 1]).create();
    let err = reindex("b_office", &rows, tag('B'), "employee_office_id").unwrap_err();
    match err {
        PipelineError::DuplicateKey { key, scope } => {
            assert_eq!(key, "B1");
            assert!(scope.contains("b_office"));
        }
        other => panic!("expected duplicate key, got {:?}", other),
    }
}

#[test]
fn missing_id_is_schema_error() {
    let rows = vec![Row::from_pairs([("Department", "IT")])];
    let err = reindex("a_office", &rows, tag('A'), "employee_office_id").unwrap_err();
    assert!(matches!(err, PipelineError::Schema { row: Some(0), .. }));
}

#[test]
fn non_integer_ids_are_schema_errors() {
    for bad in [
        ScalarValue::from("7"),
        ScalarValue::Int64(-2),
        ScalarValue::Float64(1.5),
        ScalarValue::Float64(1e20),
        ScalarValue::Boolean(true),
    ] {
        let rows = vec![Row::from_pairs([("employee_office_id", bad.clone())])];
        let result = reindex("a_office", &rows, tag('A'), "employee_office_id");
        assert!(
            matches!(result, Err(PipelineError::Schema { .. })),
            "value {:?} should be rejected",
            bad
        );
    }
}

#[test]
fn input_rows_are_left_untouched() {
    let rows = OfficeRowsFactory::new().with_ids(&[10, 11]).create();
    let before = rows.clone();
    let table = reindex("a_office", &rows, tag('A'), "employee_office_id").unwrap();
    assert_eq!(rows, before);
    assert_eq!(table.len(), 2);
}

#[test]
fn reindexing_is_injective() {
    let ids: Vec<u64> = (0..200).collect();
    let rows = OfficeRowsFactory::new().with_ids(&ids).create();
    let a = reindex("a_office", &rows, tag('A'), "employee_office_id").unwrap();
    let b = reindex("b_office", &rows, tag('B'), "employee_office_id").unwrap();

    let mut all: Vec<EmployeeKey> = a.keys().chain(b.keys()).copied().collect();
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}
