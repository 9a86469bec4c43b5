pub mod office;
pub mod unified;

pub use office::OfficeTable;
pub use unified::{UnifiedRow, UnifiedTable};

#[cfg(test)]
mod unified_tests;
