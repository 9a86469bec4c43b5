use serde::Serialize;

use crate::engine::core::row::Row;
use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::insights::Insight;
use crate::engine::metrics::ops::Accumulator;
use crate::engine::metrics::{CompareOp, Statistic};
use crate::engine::types::ScalarValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the value (numeric representations compare equal)
    Eq { field: String, value: ScalarValue },
    /// Numeric field compared against a threshold; non-numeric values never match
    Cmp {
        field: String,
        op: CompareOp,
        threshold: f64,
    },
}

impl Predicate {
    pub fn equals(field: &str, value: impl Into<ScalarValue>) -> Self {
        Predicate::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn compare(field: &str, op: CompareOp, threshold: f64) -> Self {
        Predicate::Cmp {
            field: field.to_string(),
            op,
            threshold,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Predicate::Eq { field, .. } | Predicate::Cmp { field, .. } => field,
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Predicate::Eq { field, value } => row.value(field).loosely_equals(value),
            Predicate::Cmp {
                field,
                op,
                threshold,
            } => row
                .get_f64(field)
                .is_some_and(|v| op.apply(v, *threshold)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reduce {
    /// Number of surviving rows
    Count,
    /// Number of surviving rows with a numeric value in the field
    CountField(String),
    /// Sum of the field over surviving rows
    Sum(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilteredTotalResult {
    pub matched_rows: usize,
    pub value: f64,
}

/// Rows matching every predicate, reduced to one number.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTotal {
    pub predicates: Vec<Predicate>,
    pub reduce: Reduce,
}

impl FilteredTotal {
    pub fn new(reduce: Reduce) -> Self {
        Self {
            predicates: Vec::new(),
            reduce,
        }
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}

impl Insight for FilteredTotal {
    type Output = FilteredTotalResult;

    fn name(&self) -> &str {
        "filtered_total"
    }

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output> {
        if !table.is_empty() {
            let target = match &self.reduce {
                Reduce::Count => None,
                Reduce::CountField(f) | Reduce::Sum(f) => Some(f.as_str()),
            };
            for field in self.predicates.iter().map(Predicate::field).chain(target) {
                if !table.has_column(field) {
                    return Err(PipelineError::InvalidPlan(format!(
                        "unknown field '{}'",
                        field
                    )));
                }
            }
        }

        let mut matched_rows = 0;
        let mut acc = Accumulator::new();
        for row in table.rows() {
            if !self.predicates.iter().all(|p| p.matches(&row.fields)) {
                continue;
            }
            matched_rows += 1;
            if let Reduce::CountField(f) | Reduce::Sum(f) = &self.reduce {
                if let Some(v) = row.fields.get_f64(f) {
                    acc.push(v);
                }
            }
        }

        let value = match &self.reduce {
            Reduce::Count => matched_rows as f64,
            Reduce::CountField(_) => acc.len() as f64,
            // An empty selection sums to zero.
            Reduce::Sum(_) => acc.finalize(&Statistic::Sum).unwrap_or(0.0),
        };
        Ok(FilteredTotalResult {
            matched_rows,
            value,
        })
    }
}
