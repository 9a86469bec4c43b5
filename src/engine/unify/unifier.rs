use std::collections::HashMap;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, info, warn};

use crate::engine::core::key::EmployeeKey;
use crate::engine::core::row::Row;
use crate::engine::core::table::{OfficeTable, UnifiedRow, UnifiedTable};
use crate::engine::errors::{PipelineError, Result};
use crate::engine::unify::convention::HrKeyConvention;
use crate::engine::unify::diagnostics::JoinDiagnostics;

/// The joined table together with its join accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Unified {
    pub table: UnifiedTable,
    pub diagnostics: JoinDiagnostics,
}

/// Inner-joins the two keyed office tables with the HR rows.
#[derive(Debug, Clone)]
pub struct Unifier {
    hr_source: String,
    hr_id_field: String,
    convention: HrKeyConvention,
}

impl Unifier {
    /// Id fields of HR and of both offices are left out of unified rows;
    /// the key carries them.
    pub fn new(hr_id_field: &str) -> Self {
        Self {
            hr_source: "hr".to_string(),
            hr_id_field: hr_id_field.to_string(),
            convention: HrKeyConvention::default(),
        }
    }

    pub fn with_convention(mut self, convention: HrKeyConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_hr_source(mut self, name: &str) -> Self {
        self.hr_source = name.to_string();
        self
    }

    pub fn unify(
        &self,
        office_a: &OfficeTable,
        office_b: &OfficeTable,
        hr: &[Row],
    ) -> Result<Unified> {
        let office = combine_offices(office_a, office_b)?;
        let (hr_by_key, unmapped) = self.key_hr_rows(hr)?;
        let dropped = [
            self.hr_id_field.as_str(),
            office_a.id_field(),
            office_b.id_field(),
        ];

        let mut diagnostics = JoinDiagnostics {
            office_rows: office.len(),
            hr_rows: hr.len(),
            ..JoinDiagnostics::default()
        };

        let mut rows = Vec::with_capacity(office.len().min(hr_by_key.len()));
        for (key, office_row) in office {
            match hr_by_key.get(&key) {
                Some(hr_row) => {
                    rows.push(UnifiedRow::new(key, merge(office_row, hr_row, &dropped)));
                    diagnostics.matched += 1;
                }
                None => {
                    debug!(key = %key, "Office row has no HR record");
                    diagnostics.dropped_office_only += 1;
                }
            }
        }
        diagnostics.dropped_hr_only = diagnostics.hr_rows - diagnostics.matched;

        if diagnostics.total_dropped() > 0 {
            warn!(
                dropped_hr_only = diagnostics.dropped_hr_only,
                hr_outside_office_ranges = unmapped,
                dropped_office_only = diagnostics.dropped_office_only,
                "Join dropped unmatched rows"
            );
        }

        let table = UnifiedTable::from_rows(rows)?;
        info!(
            rows = table.len(),
            columns = table.columns().len(),
            "Unified dataset created"
        );
        Ok(Unified { table, diagnostics })
    }

    fn key_hr_rows<'a>(&self, hr: &'a [Row]) -> Result<(HashMap<EmployeeKey, &'a Row>, usize)> {
        let mut by_key: HashMap<EmployeeKey, &Row> = HashMap::with_capacity(hr.len());
        let mut unmapped = 0;
        for (idx, row) in hr.iter().enumerate() {
            let value = row.value(&self.hr_id_field);
            if value.is_null() {
                return Err(PipelineError::schema(
                    &self.hr_source,
                    Some(idx),
                    &self.hr_id_field,
                    "employee id is missing",
                ));
            }
            let Some(key) =
                self.convention
                    .key_for(&self.hr_source, idx, &self.hr_id_field, value)?
            else {
                unmapped += 1;
                continue;
            };
            if by_key.insert(key, row).is_some() {
                return Err(PipelineError::duplicate_key(
                    key,
                    &format!("HR source '{}'", self.hr_source),
                ));
            }
        }
        Ok((by_key, unmapped))
    }
}

/// Office columns keep their order; HR-only columns follow. A field both
/// sides define takes the HR value unless HR leaves it null.
fn merge(office_row: &Row, hr_row: &Row, dropped: &[&str]) -> Row {
    let is_dropped = |field: &str| dropped.iter().any(|d| *d == field);
    let mut merged = Row::new();
    for (name, value) in office_row.iter() {
        if is_dropped(name.as_str()) {
            continue;
        }
        let chosen = match hr_row.get(name) {
            Some(hr_value) if !hr_value.is_null() => hr_value.clone(),
            _ => value.clone(),
        };
        merged.insert(name.clone(), chosen);
    }
    for (name, value) in hr_row.iter() {
        if is_dropped(name.as_str()) || merged.contains(name) {
            continue;
        }
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Convenience form of [`Unifier::unify`] with the default key convention.
pub fn unify(
    office_a: &OfficeTable,
    office_b: &OfficeTable,
    hr: &[Row],
    hr_id_field: &str,
) -> Result<Unified> {
    Unifier::new(hr_id_field).unify(office_a, office_b, hr)
}

fn combine_offices<'a>(
    office_a: &'a OfficeTable,
    office_b: &'a OfficeTable,
) -> Result<IndexMap<EmployeeKey, &'a Row>> {
    let mut combined: IndexMap<EmployeeKey, &Row> =
        IndexMap::with_capacity(office_a.len() + office_b.len());
    for (key, row) in office_a.iter().chain(office_b.iter()) {
        match combined.entry(*key) {
            Entry::Occupied(_) => {
                return Err(PipelineError::duplicate_key(key, "combined office tables"));
            }
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
        }
    }
    Ok(combined)
}
