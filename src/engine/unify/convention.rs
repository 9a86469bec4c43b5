use serde::Deserialize;

use crate::engine::core::key::{EmployeeKey, SourceTag};
use crate::engine::errors::{PipelineError, Result};
use crate::engine::types::ScalarValue;

/// How an HR `employee_id` maps onto the office key space.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HrKeyConvention {
    /// The HR id already is a global key such as `"A4"`.
    #[default]
    Prefixed,
    /// The HR id is an integer; each range assigns a tag and subtracts an offset.
    Ranges { ranges: Vec<OfficeIdRange> },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfficeIdRange {
    pub tag: SourceTag,
    pub first: u64,
    pub last: u64,
    #[serde(default)]
    pub offset: u64,
}

impl OfficeIdRange {
    fn map(&self, id: u64) -> Option<EmployeeKey> {
        if id < self.first || id > self.last {
            return None;
        }
        id.checked_sub(self.offset)
            .map(|local| EmployeeKey::new(self.tag, local))
    }
}

impl HrKeyConvention {
    /// Derives the global key of an HR row.
    ///
    /// `Ok(None)` means the id is well formed but falls outside every office
    /// range, so the row has no office counterpart.
    pub fn key_for(
        &self,
        source_name: &str,
        row: usize,
        field: &str,
        value: &ScalarValue,
    ) -> Result<Option<EmployeeKey>> {
        match self {
            HrKeyConvention::Prefixed => match value {
                ScalarValue::Utf8(s) => s.parse::<EmployeeKey>().map(Some).map_err(|e| {
                    PipelineError::schema(source_name, Some(row), field, e.to_string())
                }),
                other => Err(PipelineError::schema(
                    source_name,
                    Some(row),
                    field,
                    format!("expected a prefixed employee key, got '{}'", other),
                )),
            },
            HrKeyConvention::Ranges { ranges } => {
                let id = match value {
                    ScalarValue::Int64(_) | ScalarValue::Utf8(_) => value.as_u64(),
                    _ => None,
                }
                .ok_or_else(|| {
                    PipelineError::schema(
                        source_name,
                        Some(row),
                        field,
                        format!("expected a non-negative integer id, got '{}'", value),
                    )
                })?;
                Ok(ranges.iter().find_map(|r| r.map(id)))
            }
        }
    }

    /// Rejects range sets where one HR id could map to two keys.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let HrKeyConvention::Ranges { ranges } = self else {
            return Ok(());
        };
        for (i, r) in ranges.iter().enumerate() {
            if r.first > r.last {
                return Err(format!("range {}{}..{} is empty", r.tag, r.first, r.last));
            }
            if r.offset > r.first {
                return Err(format!(
                    "range {} offset {} exceeds its first id {}",
                    r.tag, r.offset, r.first
                ));
            }
            for other in &ranges[i + 1..] {
                if r.first <= other.last && other.first <= r.last {
                    return Err(format!(
                        "ranges for {} and {} overlap",
                        r.tag, other.tag
                    ));
                }
            }
        }
        Ok(())
    }
}
