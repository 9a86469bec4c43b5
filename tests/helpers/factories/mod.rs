pub mod hr_rows_factory;
pub mod office_rows_factory;
pub mod unified_table_factory;

pub use hr_rows_factory::HrRowsFactory;
pub use office_rows_factory::OfficeRowsFactory;
pub use unified_table_factory::UnifiedTableFactory;

#[cfg(test)]
mod office_rows_factory_test;
#[cfg(test)]
mod unified_table_factory_test;
