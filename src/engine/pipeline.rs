use tracing::info;

use crate::engine::core::key::SourceTag;
use crate::engine::core::table::OfficeTable;
use crate::engine::errors::Result;
use crate::engine::reindex::reindex;
use crate::engine::schema::SourceSchema;
use crate::engine::source::SourceLoader;
use crate::engine::unify::{Unified, Unifier};
use crate::shared::config::{KeysConfig, Settings};

pub const OFFICE_A_SOURCE: &str = "office_a";
pub const OFFICE_B_SOURCE: &str = "office_b";
pub const HR_SOURCE: &str = "hr";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub office_a: OfficeTable,
    pub office_b: OfficeTable,
    pub unified: Unified,
}

/// Load, reindex and unify the three sources. A failure at any stage aborts
/// the run without a partial table.
#[derive(Debug, Clone)]
pub struct Pipeline {
    keys: KeysConfig,
}

impl Pipeline {
    pub fn new(settings: &Settings) -> Self {
        Self::from_keys(settings.keys.clone())
    }

    pub fn from_keys(keys: KeysConfig) -> Self {
        Self { keys }
    }

    pub fn run(&self, loader: &dyn SourceLoader) -> Result<PipelineOutput> {
        self.run_stages(loader).inspect_err(|e| e.log_error())
    }

    fn run_stages(&self, loader: &dyn SourceLoader) -> Result<PipelineOutput> {
        let office_a = self.load_office(loader, OFFICE_A_SOURCE, self.keys.office_a_tag)?;
        let office_b = self.load_office(loader, OFFICE_B_SOURCE, self.keys.office_b_tag)?;

        let hr_rows = SourceSchema::hr(HR_SOURCE, &self.keys.hr_id_field)
            .validate(loader.load(HR_SOURCE)?)?;
        info!(source = HR_SOURCE, rows = hr_rows.len(), "Source loaded");

        let unified = Unifier::new(&self.keys.hr_id_field)
            .with_hr_source(HR_SOURCE)
            .with_convention(self.keys.hr_key.clone())
            .unify(&office_a, &office_b, &hr_rows)?;

        info!(
            rows = unified.table.len(),
            matched = unified.diagnostics.matched,
            dropped = unified.diagnostics.total_dropped(),
            "Pipeline finished"
        );
        Ok(PipelineOutput {
            office_a,
            office_b,
            unified,
        })
    }

    fn load_office(
        &self,
        loader: &dyn SourceLoader,
        source: &str,
        tag: SourceTag,
    ) -> Result<OfficeTable> {
        let rows = SourceSchema::office(source, &self.keys.office_id_field)
            .validate(loader.load(source)?)?;
        info!(source = %source, rows = rows.len(), "Source loaded");
        reindex(source, &rows, tag, &self.keys.office_id_field)
    }
}
