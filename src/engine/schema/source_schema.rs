use tracing::debug;

use crate::engine::core::row::Row;
use crate::engine::errors::{PipelineError, Result};
use crate::engine::schema::fields::*;
use crate::engine::schema::types::{FieldSpec, FieldType};

/// Fixed field layout of one source. Fields it does not name pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSchema {
    source_name: String,
    fields: Vec<FieldSpec>,
}

impl SourceSchema {
    pub fn new(source_name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            source_name: source_name.into(),
            fields,
        }
    }

    /// Layout shared by both office sources.
    pub fn office(source_name: &str, id_field: &str) -> Self {
        Self::new(
            source_name,
            vec![
                FieldSpec::required(id_field, FieldType::U64),
                FieldSpec::nullable(NUMBER_PROJECT, FieldType::I64),
                FieldSpec::nullable(AVERAGE_MONTHLY_HOURS, FieldType::I64),
                FieldSpec::nullable(TIME_SPEND_COMPANY, FieldType::I64),
                FieldSpec::nullable(WORK_ACCIDENT, FieldType::Flag),
                FieldSpec::nullable(PROMOTION_LAST_5_YEARS, FieldType::Flag),
                FieldSpec::nullable(DEPARTMENT, FieldType::String),
                FieldSpec::nullable(SALARY, FieldType::String),
            ],
        )
    }

    pub fn hr(source_name: &str, id_field: &str) -> Self {
        Self::new(
            source_name,
            vec![
                FieldSpec::required(id_field, FieldType::Identifier),
                FieldSpec::nullable(SATISFACTION_LEVEL, FieldType::F64),
                FieldSpec::nullable(LAST_EVALUATION, FieldType::F64),
                FieldSpec::nullable(LEFT, FieldType::Flag),
            ],
        )
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks and coerces every declared field of every row.
    ///
    /// Absent nullable fields are filled with `Null` so all rows of a source
    /// share the declared columns.
    pub fn validate(&self, rows: Vec<Row>) -> Result<Vec<Row>> {
        let mut out = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            out.push(self.validate_row(idx, row)?);
        }
        debug!(
            source = %self.source_name,
            rows = out.len(),
            "Rows validated against schema"
        );
        Ok(out)
    }

    fn validate_row(&self, idx: usize, mut row: Row) -> Result<Row> {
        for spec in &self.fields {
            let raw = row.value(&spec.name).clone();
            if raw.is_null() && spec.required {
                return Err(PipelineError::schema(
                    &self.source_name,
                    Some(idx),
                    &spec.name,
                    "required field is missing",
                ));
            }
            let coerced = spec.field_type.coerce(&raw).map_err(|reason| {
                PipelineError::schema(&self.source_name, Some(idx), &spec.name, reason)
            })?;
            row.insert(spec.name.clone(), coerced);
        }
        Ok(row)
    }
}
