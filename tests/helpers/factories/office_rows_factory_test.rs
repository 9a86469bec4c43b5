use crate::engine::types::ScalarValue;
use crate::test_helpers::factory::Factory;

#[cfg(test)]
#[test]
fn test_office_rows_factory() {
    let rows = Factory::office_rows()
        .with_ids(&[4, 9])
        .with("Department", "sales")
        .create();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].value("employee_office_id"), &ScalarValue::Int64(9));
    assert_eq!(rows[0].value("Department"), &ScalarValue::from("sales"));
    assert_eq!(rows[0].field_names().next(), Some("employee_office_id"));
}
