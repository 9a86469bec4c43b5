use super::unified::{UnifiedRow, UnifiedTable};
use crate::engine::core::key::EmployeeKey;
use crate::engine::core::row::Row;
use crate::engine::errors::PipelineError;

fn row(key: &str, pairs: &[(&str, i64)]) -> UnifiedRow {
    UnifiedRow::new(
        key.parse::<EmployeeKey>().unwrap(),
        Row::from_pairs(pairs.iter().map(|(k, v)| (*k, *v))),
    )
}

#[test]
fn rows_are_sorted_by_key() {
    let table = UnifiedTable::from_rows(vec![
        row("B1", &[("x", 1)]),
        row("A10", &[("x", 2)]),
        row("A2", &[("x", 3)]),
    ])
    .unwrap();
    let keys: Vec<String> = table.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["A2", "A10", "B1"]);
}

#[test]
fn columns_are_union_in_first_seen_order() {
    let table = UnifiedTable::from_rows(vec![
        row("A1", &[("a", 1), ("b", 2)]),
        row("A2", &[("c", 3), ("a", 4)]),
    ])
    .unwrap();
    assert_eq!(table.columns(), &["a", "b", "c"]);
    assert!(table.has_column("c"));
    assert!(!table.has_column("d"));
}

#[test]
fn lookup_by_key() {
    let table = UnifiedTable::from_rows(vec![row("A1", &[("a", 1)]), row("B1", &[("a", 2)])])
        .unwrap();
    let key: EmployeeKey = "B1".parse().unwrap();
    assert_eq!(table.get(&key).unwrap().fields.get_f64("a"), Some(2.0));
    assert!(table.get(&"B2".parse().unwrap()).is_none());
}

#[test]
fn repeated_key_is_rejected() {
    let result = UnifiedTable::from_rows(vec![row("A1", &[]), row("A1", &[])]);
    assert!(matches!(result, Err(PipelineError::DuplicateKey { .. })));
}
