pub mod convention;
pub mod diagnostics;
pub mod unifier;

pub use convention::{HrKeyConvention, OfficeIdRange};
pub use diagnostics::JoinDiagnostics;
pub use unifier::{Unified, Unifier, unify};

#[cfg(test)]
mod convention_test;
