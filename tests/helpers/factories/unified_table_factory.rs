use crate::engine::core::key::EmployeeKey;
use crate::engine::core::row::Row;
use crate::engine::core::table::{UnifiedRow, UnifiedTable};
use crate::engine::types::ScalarValue;

pub struct UnifiedTableFactory {
    rows: Vec<UnifiedRow>,
    next_id: u64,
}

impl UnifiedTableFactory {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a row under an explicit key such as `"A4"`.
    pub fn add(mut self, key: &str, fields: &[(&str, ScalarValue)]) -> Self {
        let key: EmployeeKey = key.parse().expect("valid employee key");
        self.rows.push(UnifiedRow::new(
            key,
            Row::from_pairs(fields.iter().map(|(k, v)| (*k, v.clone()))),
        ));
        self
    }

    /// Adds a row under the next free `A<n>` key.
    pub fn push(mut self, fields: &[(&str, ScalarValue)]) -> Self {
        while self
            .rows
            .iter()
            .any(|r| r.key.to_string() == format!("A{}", self.next_id))
        {
            self.next_id += 1;
        }
        let key = format!("A{}", self.next_id);
        self.next_id += 1;
        self.add(&key, fields)
    }

    pub fn create(self) -> UnifiedTable {
        UnifiedTable::from_rows(self.rows).expect("unique keys")
    }
}
