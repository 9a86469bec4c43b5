pub mod employee_key;

pub use employee_key::{EmployeeKey, KeyParseError, SourceTag};
