use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::metrics::aggregator::aggregate;
use crate::engine::metrics::compare::CompareOp;
use crate::engine::metrics::group_key::{GroupKey, GroupValue};
use crate::engine::metrics::plan::{AggregatePlan, Statistic};
use crate::engine::metrics::result::{AggregationResult, GroupStats};

type PivotCells = IndexMap<GroupKey, GroupStats>;

/// Cross-tabulation: one row per index value, one cell per observed column tuple.
/// Combinations with no members have no cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotTable {
    index: String,
    columns: Vec<String>,
    rows: IndexMap<GroupValue, PivotCells>,
}

impl PivotTable {
    pub fn build(
        table: &UnifiedTable,
        index: &str,
        columns: &[&str],
        measures: Vec<(&str, Vec<Statistic>)>,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(PipelineError::InvalidPlan(
                "a pivot needs at least one column field".into(),
            ));
        }
        let mut plan = AggregatePlan::by(std::iter::once(index).chain(columns.iter().copied()));
        for (field, stats) in measures {
            plan = plan.measure(field, stats);
        }
        Ok(Self::from_result(aggregate(table, &plan)?))
    }

    /// Reshapes a result: the first group-by field becomes the index.
    pub fn from_result(result: AggregationResult) -> Self {
        let mut fields = result.group_by().iter();
        let index = fields.next().cloned().unwrap_or_default();
        let columns: Vec<String> = fields.cloned().collect();

        let mut rows: IndexMap<GroupValue, PivotCells> = IndexMap::new();
        for (key, stats) in result.into_groups() {
            let Some((head, rest)) = key.split_first() else {
                continue;
            };
            rows.entry(head.clone()).or_default().insert(rest, stats);
        }
        Self {
            index,
            columns,
            rows,
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index_values(&self) -> impl Iterator<Item = &GroupValue> {
        self.rows.keys()
    }

    pub fn row(&self, index_value: &GroupValue) -> Option<&PivotCells> {
        self.rows.get(index_value)
    }

    pub fn cell(&self, index_value: &GroupValue, column: &GroupKey) -> Option<&GroupStats> {
        self.rows.get(index_value).and_then(|cells| cells.get(column))
    }

    pub fn value(
        &self,
        index_value: &GroupValue,
        column: &GroupKey,
        measure: &str,
        label: &str,
    ) -> Option<f64> {
        self.cell(index_value, column)
            .and_then(|c| c.stat(measure, label))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps the rows the filter accepts, in their original order.
    pub fn filter(&self, filter: &PivotFilter) -> Self {
        Self {
            index: self.index.clone(),
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|(_, cells)| filter.matches(cells))
                .map(|(k, cells)| (k.clone(), cells.clone()))
                .collect(),
        }
    }

    pub fn rounded(&self, places: u32) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|(k, cells)| {
                let cells = AggregationResult::new(Vec::new(), cells.clone())
                    .rounded(places)
                    .into_groups();
                (k.clone(), cells)
            })
            .collect();
        Self {
            index: self.index.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// `left <op> right` between two cells of the same pivot row.
#[derive(Debug, Clone, PartialEq)]
pub struct CellComparison {
    pub measure: String,
    pub statistic: Statistic,
    pub left: GroupKey,
    pub op: CompareOp,
    pub right: GroupKey,
}

impl CellComparison {
    pub fn new(
        measure: &str,
        statistic: Statistic,
        left: impl Into<GroupKey>,
        op: CompareOp,
        right: impl Into<GroupKey>,
    ) -> Self {
        Self {
            measure: measure.to_string(),
            statistic,
            left: left.into(),
            op,
            right: right.into(),
        }
    }

    /// False when either cell or statistic is missing.
    fn holds(&self, cells: &PivotCells) -> bool {
        let label = self.statistic.label();
        let value = |column: &GroupKey| cells.get(column).and_then(|c| c.stat(&self.measure, &label));
        match (value(&self.left), value(&self.right)) {
            (Some(l), Some(r)) => self.op.apply(l, r),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PivotFilter {
    Any(Vec<CellComparison>),
    All(Vec<CellComparison>),
}

impl PivotFilter {
    fn matches(&self, cells: &PivotCells) -> bool {
        match self {
            PivotFilter::Any(cmps) => cmps.iter().any(|c| c.holds(cells)),
            PivotFilter::All(cmps) => cmps.iter().all(|c| c.holds(cells)),
        }
    }
}
