pub mod battery;
pub mod filtered;
pub mod top_n;
pub mod trace;

pub use battery::{BatteryConfig, BatteryReport, InsightBattery};
pub use filtered::{FilteredTotal, FilteredTotalResult, Predicate, Reduce};
pub use top_n::{RankedGroup, RankedRow, TopGroupsBySum, TopRowsByMeasure};
pub use trace::{EmployeeTrace, EmployeeTraceBatch, TraceEntry};

use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::Result;

/// A named query over the unified table.
pub trait Insight {
    type Output;

    fn name(&self) -> &str;

    fn run(&self, table: &UnifiedTable) -> Result<Self::Output>;
}
