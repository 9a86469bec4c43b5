use std::collections::HashMap;

use indexmap::IndexSet;
use serde::Serialize;

use crate::engine::core::key::EmployeeKey;
use crate::engine::core::row::Row;
use crate::engine::errors::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifiedRow {
    pub key: EmployeeKey,
    pub fields: Row,
}

impl UnifiedRow {
    pub fn new(key: EmployeeKey, fields: Row) -> Self {
        Self { key, fields }
    }
}

/// Joined office + HR records, ordered by employee key. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedTable {
    columns: Vec<String>,
    rows: Vec<UnifiedRow>,
    index: HashMap<EmployeeKey, usize>,
}

impl UnifiedTable {
    /// Sorts rows by key and indexes them. A repeated key is a `DuplicateKey` error.
    pub fn from_rows(mut rows: Vec<UnifiedRow>) -> Result<Self> {
        rows.sort_by_key(|r| r.key);

        let mut index = HashMap::with_capacity(rows.len());
        let mut columns: IndexSet<String> = IndexSet::new();
        for (pos, row) in rows.iter().enumerate() {
            if index.insert(row.key, pos).is_some() {
                return Err(PipelineError::duplicate_key(row.key, "unified table"));
            }
            for name in row.fields.field_names() {
                if !columns.contains(name) {
                    columns.insert(name.to_string());
                }
            }
        }

        Ok(Self {
            columns: columns.into_iter().collect(),
            rows,
            index,
        })
    }

    pub fn rows(&self) -> &[UnifiedRow] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn get(&self, key: &EmployeeKey) -> Option<&UnifiedRow> {
        self.index.get(key).map(|&pos| &self.rows[pos])
    }

    pub fn keys(&self) -> impl Iterator<Item = &EmployeeKey> {
        self.rows.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
