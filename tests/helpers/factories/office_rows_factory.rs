use crate::engine::core::row::Row;
use crate::engine::types::ScalarValue;

pub struct OfficeRowsFactory {
    ids: Vec<u64>,
    id_field: String,
    fields: Vec<(String, ScalarValue)>,
}

impl OfficeRowsFactory {
    pub fn new() -> Self {
        Self {
            ids: vec![1],
            id_field: "employee_office_id".into(),
            fields: vec![
                ("number_project".into(), ScalarValue::Int64(3)),
                ("average_monthly_hours".into(), ScalarValue::Int64(160)),
                ("time_spend_company".into(), ScalarValue::Int64(3)),
                ("Work_accident".into(), ScalarValue::Int64(0)),
                ("promotion_last_5years".into(), ScalarValue::Int64(0)),
                ("Department".into(), ScalarValue::from("IT")),
                ("salary".into(), ScalarValue::from("low")),
            ],
        }
    }

    pub fn with_ids(mut self, ids: &[u64]) -> Self {
        self.ids = ids.to_vec();
        self
    }

    pub fn with_id_field(mut self, name: &str) -> Self {
        self.id_field = name.to_string();
        self
    }

    /// Sets `name` to `value` on every row.
    pub fn with(mut self, name: &str, value: impl Into<ScalarValue>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
        self
    }

    pub fn create(self) -> Vec<Row> {
        self.ids
            .iter()
            .map(|id| {
                let mut row = Row::new();
                row.insert(self.id_field.clone(), ScalarValue::Int64(*id as i64));
                for (name, value) in &self.fields {
                    row.insert(name.clone(), value.clone());
                }
                row
            })
            .collect()
    }
}
