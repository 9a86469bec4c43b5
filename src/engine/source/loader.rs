use crate::engine::core::row::Row;
use crate::engine::errors::Result;

/// Supplies the raw rows of a named source.
///
/// Implementations must fail with `SourceUnavailable` rather than return an
/// empty sequence when a source cannot be obtained.
pub trait SourceLoader {
    fn load(&self, source: &str) -> Result<Vec<Row>>;
}
