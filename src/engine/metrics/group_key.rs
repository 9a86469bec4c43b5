use std::fmt;

use serde::{Serialize, Serializer};

use crate::engine::core::row::Row;
use crate::engine::types::ScalarValue;

/// One component of a group key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GroupValue {
    Int(i64),
    Bool(bool),
    /// Bit pattern of a finite float; `-0.0` is stored as `0.0`
    Float(u64),
    Str(String),
}

impl GroupValue {
    /// `None` for null values; such rows take no part in grouping.
    pub fn from_scalar(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Null => None,
            ScalarValue::Int64(i) => Some(GroupValue::Int(*i)),
            ScalarValue::Boolean(b) => Some(GroupValue::Bool(*b)),
            ScalarValue::Float64(f) => Some(GroupValue::float(*f)),
            ScalarValue::Utf8(s) => Some(GroupValue::Str(s.clone())),
        }
    }
}

impl GroupValue {
    pub fn float(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        GroupValue::Float(value.to_bits())
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Int(i) => write!(f, "{}", i),
            GroupValue::Bool(b) => write!(f, "{}", b),
            // Debug keeps the fraction, so 3.0 renders apart from Int(3)
            GroupValue::Float(bits) => write!(f, "{:?}", f64::from_bits(*bits)),
            GroupValue::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for GroupValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for GroupValue {
    fn from(value: &str) -> Self {
        GroupValue::Str(value.to_string())
    }
}

impl From<i64> for GroupValue {
    fn from(value: i64) -> Self {
        GroupValue::Int(value)
    }
}

impl From<bool> for GroupValue {
    fn from(value: bool) -> Self {
        GroupValue::Bool(value)
    }
}

/// Values of the grouping fields for one bucket, in group-by order.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct GroupKey(Vec<GroupValue>);

impl GroupKey {
    pub fn new(values: Vec<GroupValue>) -> Self {
        Self(values)
    }

    /// Builds the key of `row`, or `None` if any grouping field is null or absent.
    pub fn from_row(row: &Row, group_by: &[String]) -> Option<Self> {
        group_by
            .iter()
            .map(|field| GroupValue::from_scalar(row.value(field)))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    pub fn values(&self) -> &[GroupValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First value and the key made of the rest.
    pub fn split_first(&self) -> Option<(&GroupValue, GroupKey)> {
        self.0
            .split_first()
            .map(|(head, tail)| (head, GroupKey(tail.to_vec())))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<V: Into<GroupValue>> From<Vec<V>> for GroupKey {
    fn from(values: Vec<V>) -> Self {
        GroupKey(values.into_iter().map(Into::into).collect())
    }
}
