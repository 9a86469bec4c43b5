use crate::engine::core::row::Row;
use crate::engine::errors::PipelineError;
use crate::engine::source::{MemoryLoader, SourceLoader};

#[test]
fn returns_registered_rows() {
    let loader = MemoryLoader::new().with_source("hr", vec![Row::from_pairs([("employee_id", "A1")])]);
    assert_eq!(loader.load("hr").unwrap().len(), 1);
}

#[test]
fn unknown_source_is_unavailable_not_empty() {
    let loader = MemoryLoader::new();
    let err = loader.load("a_office").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::SourceUnavailable { ref source_name, .. } if source_name == "a_office"
    ));
}
