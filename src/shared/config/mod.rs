pub mod model;

pub use model::{
    KeysConfig, LoggingConfig, ReportConfig, Settings, SourcesConfig, load_settings,
    load_settings_from,
};
