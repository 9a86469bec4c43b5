pub mod key;
pub mod row;
pub mod table;

pub use key::{EmployeeKey, KeyParseError, SourceTag};
pub use row::{FieldMap, Row};
pub use table::{OfficeTable, UnifiedRow, UnifiedTable};
