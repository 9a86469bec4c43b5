use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::engine::core::row::{FieldMap, Row};
use crate::engine::errors::{PipelineError, Result};
use crate::engine::source::loader::SourceLoader;
use crate::engine::types::ScalarValue;

/// Reads each source from a file in one directory holding a JSON array of flat objects.
#[derive(Debug, Clone)]
pub struct JsonDirLoader {
    dir: PathBuf,
    files: HashMap<String, String>,
}

impl JsonDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: HashMap::new(),
        }
    }

    /// Maps a source name to a file name; unmapped sources read `<name>.json`.
    pub fn with_file(mut self, source: &str, file: &str) -> Self {
        self.files.insert(source.to_string(), file.to_string());
        self
    }

    pub fn path_for(&self, source: &str) -> PathBuf {
        match self.files.get(source) {
            Some(file) => self.dir.join(file),
            None => self.dir.join(format!("{}.json", source)),
        }
    }

    fn read_document(source: &str, path: &Path) -> Result<JsonValue> {
        let text = fs::read_to_string(path).map_err(|e| {
            PipelineError::source_unavailable(source, format!("{}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            PipelineError::source_unavailable(source, format!("{}: {}", path.display(), e))
        })
    }

    fn to_row(source: &str, idx: usize, value: &JsonValue) -> Result<Row> {
        let JsonValue::Object(obj) = value else {
            return Err(PipelineError::schema(
                source,
                Some(idx),
                "<row>",
                "expected a JSON object",
            ));
        };
        let mut fields = FieldMap::with_capacity(obj.len());
        for (name, raw) in obj {
            let scalar = ScalarValue::from_json(raw).ok_or_else(|| {
                PipelineError::schema(source, Some(idx), name, "nested values are not supported")
            })?;
            fields.insert(name.clone(), scalar);
        }
        Ok(Row::from_fields(fields))
    }
}

impl SourceLoader for JsonDirLoader {
    fn load(&self, source: &str) -> Result<Vec<Row>> {
        let path = self.path_for(source);
        debug!(source = %source, path = %path.display(), "Reading source file");

        let doc = Self::read_document(source, &path)?;
        let JsonValue::Array(items) = doc else {
            return Err(PipelineError::source_unavailable(
                source,
                format!("{}: top-level value is not an array", path.display()),
            ));
        };

        let rows = items
            .iter()
            .enumerate()
            .map(|(idx, item)| Self::to_row(source, idx, item))
            .collect::<Result<Vec<_>>>()?;
        info!(source = %source, rows = rows.len(), "Loaded source");
        Ok(rows)
    }
}
