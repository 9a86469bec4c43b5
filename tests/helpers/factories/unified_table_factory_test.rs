use crate::engine::types::ScalarValue;
use crate::test_helpers::factory::Factory;

#[cfg(test)]
#[test]
fn test_unified_table_factory() {
    let table = Factory::unified_table()
        .add("A1", &[("left", ScalarValue::Int64(1))])
        .push(&[("left", ScalarValue::Int64(0))])
        .create();

    let keys: Vec<String> = table.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["A1", "A2"]);
    assert_eq!(table.columns(), &["left".to_string()]);
}
