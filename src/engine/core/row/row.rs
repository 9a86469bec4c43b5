use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::types::ScalarValue;

pub type FieldMap = IndexMap<String, ScalarValue>;

/// One record: field name to value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: FieldMap,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: FieldMap) -> Self {
        Self { fields }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ScalarValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<&ScalarValue> {
        self.fields.get(field)
    }

    /// Value of `field`, with absent fields reading as `Null`.
    pub fn value(&self, field: &str) -> &ScalarValue {
        static NULL: ScalarValue = ScalarValue::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(ScalarValue::as_f64)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: ScalarValue) -> Option<ScalarValue> {
        self.fields.insert(field.into(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<ScalarValue> {
        self.fields.shift_remove(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ScalarValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copies the named fields, skipping ones the row lacks.
    pub fn project(&self, fields: &[String]) -> FieldMap {
        fields
            .iter()
            .filter_map(|f| self.fields.get(f).map(|v| (f.clone(), v.clone())))
            .collect()
    }
}
