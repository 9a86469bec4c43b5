use std::cmp::Ordering;

use serde::Serialize;

use crate::engine::core::key::EmployeeKey;
use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::Result;
use crate::engine::insights::Insight;
use crate::engine::metrics::{AggregatePlan, GroupKey, Statistic, aggregate};
use crate::engine::types::ScalarValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGroup {
    pub group: GroupKey,
    pub total: f64,
}

/// Groups by one field, sums a measure, and keeps the `n` largest totals.
///
/// Ties break on the group key's text, ascending. Fewer than `n` groups is not
/// an error; all of them are returned.
#[derive(Debug, Clone, PartialEq)]
pub struct TopGroupsBySum {
    pub group_by: String,
    pub measure: String,
    pub n: usize,
}

impl TopGroupsBySum {
    pub fn new(group_by: &str, measure: &str, n: usize) -> Self {
        Self {
            group_by: group_by.to_string(),
            measure: measure.to_string(),
            n,
        }
    }
}

impl Insight for TopGroupsBySum {
    type Output = Vec<RankedGroup>;

    fn name(&self) -> &str {
        "top_groups_by_sum"
    }

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output> {
        let plan = AggregatePlan::by([self.group_by.as_str()])
            .measure(&self.measure, [Statistic::Sum]);
        let result = aggregate(table, &plan)?;
        let label = Statistic::Sum.label();

        let mut ranked: Vec<RankedGroup> = result
            .groups()
            .filter_map(|(key, stats)| {
                stats.stat(&self.measure, &label).map(|total| RankedGroup {
                    group: key.clone(),
                    total,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.group.to_string().cmp(&b.group.to_string()))
        });
        ranked.truncate(self.n);
        Ok(ranked)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub key: EmployeeKey,
    pub value: f64,
    pub projected: ScalarValue,
}

/// The `n` rows with the largest measure value, each projected onto one field.
/// Ties keep key order; rows without a numeric measure are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRowsByMeasure {
    pub measure: String,
    pub project: String,
    pub n: usize,
}

impl TopRowsByMeasure {
    pub fn new(measure: &str, project: &str, n: usize) -> Self {
        Self {
            measure: measure.to_string(),
            project: project.to_string(),
            n,
        }
    }
}

impl Insight for TopRowsByMeasure {
    type Output = Vec<RankedRow>;

    fn name(&self) -> &str {
        "top_rows_by_measure"
    }

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output> {
        let mut ranked: Vec<RankedRow> = table
            .rows()
            .iter()
            .filter_map(|row| {
                row.fields.get_f64(&self.measure).map(|value| RankedRow {
                    key: row.key,
                    value,
                    projected: row.fields.value(&self.project).clone(),
                })
            })
            .collect();
        ranked.sort_by(|a, b| match b.value.total_cmp(&a.value) {
            Ordering::Equal => a.key.cmp(&b.key),
            other => other,
        });
        ranked.truncate(self.n);
        Ok(ranked)
    }
}
