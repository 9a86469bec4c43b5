pub mod row;

pub use row::{FieldMap, Row};

#[cfg(test)]
mod row_tests;
