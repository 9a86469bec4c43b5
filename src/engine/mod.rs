pub mod core;
pub mod errors;
pub mod insights;
pub mod metrics;
pub mod pipeline;
pub mod reindex;
pub mod schema;
pub mod source;
pub mod types;
pub mod unify;

pub use errors::*;
