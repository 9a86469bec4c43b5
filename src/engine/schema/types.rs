use std::fmt;

use crate::engine::types::ScalarValue;

/// Declared type of a source field.
/// `Flag` is stored as Int64 0/1 so it groups and averages like the raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    I64,
    U64,
    F64,
    Flag,
    Identifier,
}

impl FieldType {
    /// Coerces a raw value into this type. `Null` passes through; the caller
    /// decides whether the field may be absent.
    pub fn coerce(&self, value: &ScalarValue) -> Result<ScalarValue, String> {
        if value.is_null() {
            return Ok(ScalarValue::Null);
        }
        let coerced = match self {
            FieldType::String => value.as_str().map(|s| ScalarValue::Utf8(s.to_string())),
            FieldType::I64 => match value {
                ScalarValue::Boolean(_) => None,
                v => v.as_i64().map(ScalarValue::Int64),
            },
            FieldType::U64 => match value {
                ScalarValue::Boolean(_) => None,
                v => v
                    .as_u64()
                    .and_then(|u| i64::try_from(u).ok())
                    .map(ScalarValue::Int64),
            },
            FieldType::F64 => match value {
                ScalarValue::Boolean(_) => None,
                v => v.as_f64().map(ScalarValue::Float64),
            },
            FieldType::Flag => match value {
                ScalarValue::Float64(f) if *f == 0.0 || *f == 1.0 => {
                    Some(ScalarValue::Int64(*f as i64))
                }
                v => v.as_bool().map(|b| ScalarValue::Int64(if b { 1 } else { 0 })),
            },
            FieldType::Identifier => match value {
                ScalarValue::Int64(i) if *i >= 0 => Some(ScalarValue::Int64(*i)),
                ScalarValue::Float64(_) => value.as_u64().map(|u| ScalarValue::Int64(u as i64)),
                ScalarValue::Utf8(s) if !s.trim().is_empty() => {
                    Some(ScalarValue::Utf8(s.trim().to_string()))
                }
                _ => None,
            },
        };
        coerced.ok_or_else(|| {
            format!(
                "expected {}, got {} value '{}'",
                self,
                value.logical_type(),
                value
            )
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::I64 => "integer",
            FieldType::U64 => "non-negative integer",
            FieldType::F64 => "number",
            FieldType::Flag => "0/1 flag",
            FieldType::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: true,
        }
    }

    pub fn nullable(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: false,
        }
    }
}
