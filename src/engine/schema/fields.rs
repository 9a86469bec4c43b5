// Column names as they appear in the office and HR sources.
pub const EMPLOYEE_OFFICE_ID: &str = "employee_office_id";
pub const EMPLOYEE_ID: &str = "employee_id";
pub const NUMBER_PROJECT: &str = "number_project";
pub const AVERAGE_MONTHLY_HOURS: &str = "average_monthly_hours";
pub const TIME_SPEND_COMPANY: &str = "time_spend_company";
pub const WORK_ACCIDENT: &str = "Work_accident";
pub const PROMOTION_LAST_5_YEARS: &str = "promotion_last_5years";
pub const DEPARTMENT: &str = "Department";
pub const SALARY: &str = "salary";
pub const SATISFACTION_LEVEL: &str = "satisfaction_level";
pub const LAST_EVALUATION: &str = "last_evaluation";
pub const LEFT: &str = "left";
