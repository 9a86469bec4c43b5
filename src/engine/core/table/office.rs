use indexmap::IndexMap;

use crate::engine::core::key::{EmployeeKey, SourceTag};
use crate::engine::core::row::Row;

/// Rows of one office source, keyed by global employee key in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficeTable {
    source_name: String,
    tag: SourceTag,
    id_field: String,
    rows: IndexMap<EmployeeKey, Row>,
}

impl OfficeTable {
    pub(crate) fn new(
        source_name: impl Into<String>,
        tag: SourceTag,
        id_field: impl Into<String>,
        rows: IndexMap<EmployeeKey, Row>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            tag,
            id_field: id_field.into(),
            rows,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn tag(&self) -> SourceTag {
        self.tag
    }

    /// Local id field the keys were built from.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn get(&self, key: &EmployeeKey) -> Option<&Row> {
        self.rows.get(key)
    }

    pub fn contains(&self, key: &EmployeeKey) -> bool {
        self.rows.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EmployeeKey> {
        self.rows.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeKey, &Row)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
