pub mod aggregator;
pub mod compare;
pub mod group_key;
pub mod ops;
pub mod pivot;
pub mod plan;
pub mod result;

pub use aggregator::aggregate;
pub use compare::CompareOp;
pub use group_key::{GroupKey, GroupValue};
pub use pivot::{CellComparison, PivotFilter, PivotTable};
pub use plan::{AggregatePlan, MAX_GROUP_DIMS, Statistic};
pub use result::{AggregationResult, GroupStats, StatMap};
