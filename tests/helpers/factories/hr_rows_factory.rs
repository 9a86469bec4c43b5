use crate::engine::core::row::Row;
use crate::engine::types::ScalarValue;

pub struct HrRowsFactory {
    ids: Vec<ScalarValue>,
    fields: Vec<(String, ScalarValue)>,
}

impl HrRowsFactory {
    pub fn new() -> Self {
        Self {
            ids: vec![ScalarValue::from("A1")],
            fields: vec![
                ("satisfaction_level".into(), ScalarValue::Float64(0.5)),
                ("last_evaluation".into(), ScalarValue::Float64(0.7)),
                ("left".into(), ScalarValue::Int64(0)),
            ],
        }
    }

    /// Prefixed HR ids such as `"A4"`.
    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.ids = keys.iter().map(|k| ScalarValue::from(*k)).collect();
        self
    }

    /// Plain integer HR ids, for range-based key conventions.
    pub fn with_numeric_ids(mut self, ids: &[i64]) -> Self {
        self.ids = ids.iter().map(|i| ScalarValue::Int64(*i)).collect();
        self
    }

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
            .into_iter()
            .map(|id| {
                let mut row = Row::new();
                row.insert("employee_id", id);
                for (name, value) in &self.fields {
                    row.insert(name.clone(), value.clone());
                }
                row
            })
            .collect()
    }
}
