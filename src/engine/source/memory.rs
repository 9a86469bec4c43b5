use std::collections::HashMap;

use crate::engine::core::row::Row;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::source::loader::SourceLoader;

/// Named sources held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sources: HashMap<String, Vec<Row>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, name: &str, rows: Vec<Row>) -> Self {
        self.sources.insert(name.to_string(), rows);
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, source: &str) -> Result<Vec<Row>> {
        self.sources
            .get(source)
            .cloned()
            .ok_or_else(|| PipelineError::source_unavailable(source, "no such in-memory source"))
    }
}
