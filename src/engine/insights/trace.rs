use serde::Serialize;
use tracing::warn;

use crate::engine::core::key::EmployeeKey;
use crate::engine::core::row::FieldMap;
use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::insights::Insight;

/// Projects selected fields of one employee. An absent key is `NotFound`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTrace {
    pub key: EmployeeKey,
    pub fields: Vec<String>,
}

impl EmployeeTrace {
    pub fn new(key: EmployeeKey, fields: &[&str]) -> Self {
        Self {
            key,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Insight for EmployeeTrace {
    type Output = FieldMap;

    fn name(&self) -> &str {
        "employee_trace"
    }

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output> {
        table
            .get(&self.key)
            .map(|row| row.fields.project(&self.fields))
            .ok_or_else(|| PipelineError::NotFound {
                key: self.key.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub key: EmployeeKey,
    /// `None` when the employee is not in the table.
    pub fields: Option<FieldMap>,
}

/// Traces several employees; misses are reported per entry, not as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTraceBatch {
    pub keys: Vec<EmployeeKey>,
    pub fields: Vec<String>,
}

impl EmployeeTraceBatch {
    pub fn new(keys: Vec<EmployeeKey>, fields: &[&str]) -> Self {
        Self {
            keys,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Insight for EmployeeTraceBatch {
    type Output = Vec<TraceEntry>;

    fn name(&self) -> &str {
        "employee_trace_batch"
    }

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output> {
        let mut out = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let single = EmployeeTrace {
                key: *key,
                fields: self.fields.clone(),
            };
            let fields = match single.run(table) {
                Ok(fields) => Some(fields),
                Err(PipelineError::NotFound { .. }) => {
                    warn!(key = %key, "Employee not found in dataset");
                    None
                }
                Err(e) => return Err(e),
            };
            out.push(TraceEntry { key: *key, fields });
        }
        Ok(out)
    }
}
