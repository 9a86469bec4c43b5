use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors raised while loading, reconciling, or querying employee records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Schema error in source '{source_name}' (row {row:?}, field '{field}'): {reason}")]
    Schema {
        source_name: String,
        row: Option<usize>,
        field: String,
        reason: String,
    },

    #[error("Duplicate employee key '{key}' in {scope}")]
    DuplicateKey { key: String, scope: String },

    #[error("Source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Employee '{key}' not found")]
    NotFound { key: String },

    #[error("Invalid aggregate plan: {0}")]
    InvalidPlan(String),
}

impl PipelineError {
    pub fn schema(
        source_name: &str,
        row: Option<usize>,
        field: &str,
        reason: impl Into<String>,
    ) -> Self {
        PipelineError::Schema {
            source_name: source_name.to_string(),
            row,
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_key(key: impl ToString, scope: &str) -> Self {
        PipelineError::DuplicateKey {
            key: key.to_string(),
            scope: scope.to_string(),
        }
    }

    pub fn source_unavailable(source_name: &str, reason: impl ToString) -> Self {
        PipelineError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Structural errors abort a run; the rest are ordinary query outcomes.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            PipelineError::Schema { .. }
                | PipelineError::DuplicateKey { .. }
                | PipelineError::SourceUnavailable { .. }
        )
    }

    pub fn log_error(&self) {
        match self {
            PipelineError::Schema {
                source_name, field, ..
            } => {
                error!(source = %source_name, field = %field, "Schema validation failed: {}", self);
                debug!("Schema error details: {:?}", self);
            }
            PipelineError::DuplicateKey { key, scope } => {
                error!(key = %key, scope = %scope, "Duplicate employee key");
            }
            PipelineError::SourceUnavailable {
                source_name,
                reason,
            } => {
                error!(source = %source_name, "Source unavailable: {}", reason);
            }
            PipelineError::NotFound { key } => {
                warn!(key = %key, "Employee lookup missed");
            }
            PipelineError::InvalidPlan(msg) => {
                error!("Invalid aggregate plan: {}", msg);
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
