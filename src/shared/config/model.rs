use serde::Deserialize;
use std::env;

use crate::engine::core::key::{EmployeeKey, SourceTag};
use crate::engine::insights::BatteryConfig;
use crate::engine::schema::fields::{EMPLOYEE_ID, EMPLOYEE_OFFICE_ID};
use crate::engine::unify::HrKeyConvention;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sources: SourcesConfig,
    pub keys: KeysConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub data_dir: String,
    pub office_a: String,
    pub office_b: String,
    pub hr: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeysConfig {
    pub office_a_tag: SourceTag,
    pub office_b_tag: SourceTag,
    #[serde(default = "default_office_id_field")]
    pub office_id_field: String,
    #[serde(default = "default_hr_id_field")]
    pub hr_id_field: String,
    #[serde(default)]
    pub hr_key: HrKeyConvention,
}

fn default_office_id_field() -> String {
    EMPLOYEE_OFFICE_ID.to_string()
}

fn default_hr_id_field() -> String {
    EMPLOYEE_ID.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub top_n: usize,
    /// Projects above this count as overloaded in the employee metrics
    pub busy_project_threshold: f64,
    pub focus_department: String,
    pub focus_salary: String,
    pub trace_employees: Vec<EmployeeKey>,
    pub round_places: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let battery = BatteryConfig::default();
        Self {
            top_n: battery.top_n,
            busy_project_threshold: battery.busy_project_threshold,
            focus_department: battery.focus_department,
            focus_salary: battery.focus_salary,
            trace_employees: battery.trace_employees,
            round_places: battery.round_places,
        }
    }
}

impl ReportConfig {
    pub fn to_battery_config(&self) -> BatteryConfig {
        BatteryConfig {
            top_n: self.top_n,
            busy_project_threshold: self.busy_project_threshold,
            focus_department: self.focus_department.clone(),
            focus_salary: self.focus_salary.clone(),
            trace_employees: self.trace_employees.clone(),
            round_places: self.round_places,
        }
    }
}

impl Settings {
    fn check(&self) -> Result<(), config::ConfigError> {
        if self.keys.office_a_tag == self.keys.office_b_tag {
            return Err(config::ConfigError::Message(format!(
                "office tags must differ, both are '{}'",
                self.keys.office_a_tag
            )));
        }
        if !self.report.busy_project_threshold.is_finite() {
            return Err(config::ConfigError::Message(
                "report.busy_project_threshold must be finite".to_string(),
            ));
        }
        self.keys
            .hr_key
            .validate()
            .map_err(config::ConfigError::Message)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("HR_INSIGHTS_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path))
        .build()?
        .try_deserialize()?;

    settings.check()?;
    Ok(settings)
}
