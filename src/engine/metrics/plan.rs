use indexmap::IndexMap;

use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::{PipelineError, Result};

/// Upper bound on grouping fields; three covers index plus two pivot columns.
pub const MAX_GROUP_DIMS: usize = 3;

/// A statistic computed over one measure within one group
#[derive(Debug, Clone, PartialEq)]
pub enum Statistic {
    Mean,
    Median,
    /// Sample standard deviation (n - 1)
    Std,
    /// Number of contributing values
    Count,
    /// Values strictly greater than the threshold
    CountAbove(f64),
    Sum,
    Min,
    Max,
}

impl Statistic {
    /// Output name, e.g. `median` or `count_above_5`.
    pub fn label(&self) -> String {
        match self {
            Statistic::Mean => "mean".to_string(),
            Statistic::Median => "median".to_string(),
            Statistic::Std => "std".to_string(),
            Statistic::Count => "count".to_string(),
            Statistic::CountAbove(t) => format!("count_above_{}", t),
            Statistic::Sum => "sum".to_string(),
            Statistic::Min => "min".to_string(),
            Statistic::Max => "max".to_string(),
        }
    }
}

/// Grouping fields plus the statistics wanted per measure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatePlan {
    pub group_by: Vec<String>,
    pub measures: IndexMap<String, Vec<Statistic>>,
}

impl AggregatePlan {
    pub fn by<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_by: fields.into_iter().map(Into::into).collect(),
            measures: IndexMap::new(),
        }
    }

    /// Adds statistics for `field`; repeated labels are kept once.
    pub fn measure<I>(mut self, field: &str, stats: I) -> Self
    where
        I: IntoIterator<Item = Statistic>,
    {
        let entry = self.measures.entry(field.to_string()).or_default();
        for stat in stats {
            if !entry.iter().any(|s| s.label() == stat.label()) {
                entry.push(stat);
            }
        }
        self
    }

    pub fn validate(&self, table: &UnifiedTable) -> Result<()> {
        if self.group_by.is_empty() {
            return Err(PipelineError::InvalidPlan(
                "at least one group-by field is required".into(),
            ));
        }
        if self.group_by.len() > MAX_GROUP_DIMS {
            return Err(PipelineError::InvalidPlan(format!(
                "{} group-by fields given, at most {} supported",
                self.group_by.len(),
                MAX_GROUP_DIMS
            )));
        }
        for (i, field) in self.group_by.iter().enumerate() {
            if self.group_by[..i].contains(field) {
                return Err(PipelineError::InvalidPlan(format!(
                    "group-by field '{}' repeated",
                    field
                )));
            }
        }
        for stats in self.measures.values() {
            for stat in stats {
                if let Statistic::CountAbove(t) = stat {
                    if !t.is_finite() {
                        return Err(PipelineError::InvalidPlan(format!(
                            "threshold {} is not finite",
                            t
                        )));
                    }
                }
            }
        }

        // An empty table has no columns to check against.
        if !table.is_empty() {
            for field in self.group_by.iter().chain(self.measures.keys()) {
                if !table.has_column(field) {
                    return Err(PipelineError::InvalidPlan(format!(
                        "unknown field '{}'",
                        field
                    )));
                }
            }
        }
        Ok(())
    }
}
