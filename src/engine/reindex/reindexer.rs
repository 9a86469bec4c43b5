use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::info;

use crate::engine::core::key::{EmployeeKey, SourceTag};
use crate::engine::core::row::Row;
use crate::engine::core::table::OfficeTable;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::types::ScalarValue;

/// Keys every office row by `tag + local id`.
///
/// The id must be a non-negative integer. Two rows yielding the same key fail
/// with `DuplicateKey`; nothing is merged. Input rows are not modified.
pub fn reindex(
    source_name: &str,
    rows: &[Row],
    tag: SourceTag,
    id_field: &str,
) -> Result<OfficeTable> {
    let mut keyed: IndexMap<EmployeeKey, Row> = IndexMap::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let local_id = local_id_of(source_name, idx, row, id_field)?;
        let key = EmployeeKey::new(tag, local_id);
        match keyed.entry(key) {
            Entry::Occupied(_) => {
                return Err(PipelineError::duplicate_key(
                    key,
                    &format!("office source '{}'", source_name),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(row.clone());
            }
        }
    }

    info!(
        source = %source_name,
        tag = %tag,
        keys = keyed.len(),
        "Office rows reindexed"
    );
    Ok(OfficeTable::new(source_name, tag, id_field, keyed))
}

fn local_id_of(source_name: &str, idx: usize, row: &Row, id_field: &str) -> Result<u64> {
    match row.get(id_field) {
        None | Some(ScalarValue::Null) => Err(PipelineError::schema(
            source_name,
            Some(idx),
            id_field,
            "local id is missing",
        )),
        Some(value @ (ScalarValue::Int64(_) | ScalarValue::Float64(_))) => {
            value.as_u64().ok_or_else(|| {
                PipelineError::schema(
                    source_name,
                    Some(idx),
                    id_field,
                    format!("local id '{}' is not a non-negative integer", value),
                )
            })
        }
        Some(other) => Err(PipelineError::schema(
            source_name,
            Some(idx),
            id_field,
            format!("local id has type {}, expected integer", other.logical_type()),
        )),
    }
}
