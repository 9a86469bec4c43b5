pub use super::factories::{HrRowsFactory, OfficeRowsFactory, UnifiedTableFactory};

pub struct Factory;

impl Factory {
    pub fn office_rows() -> OfficeRowsFactory {
        OfficeRowsFactory::new()
    }

    pub fn hr_rows() -> HrRowsFactory {
        HrRowsFactory::new()
    }

    pub fn unified_table() -> UnifiedTableFactory {
        UnifiedTableFactory::new()
    }
}
