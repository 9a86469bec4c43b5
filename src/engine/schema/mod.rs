pub mod fields;
pub mod source_schema;
pub mod types;

pub use source_schema::SourceSchema;
pub use types::{FieldSpec, FieldType};
