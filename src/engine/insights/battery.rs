use serde::Serialize;
use tracing::info;

use crate::engine::core::key::EmployeeKey;
use crate::engine::core::table::UnifiedTable;
use crate::engine::errors::Result;
use crate::engine::insights::Insight;
use crate::engine::insights::filtered::{FilteredTotal, FilteredTotalResult, Predicate, Reduce};
use crate::engine::insights::top_n::{RankedGroup, TopGroupsBySum, TopRowsByMeasure};
use crate::engine::insights::trace::{EmployeeTraceBatch, TraceEntry};
use crate::engine::metrics::{
    AggregatePlan, AggregationResult, CellComparison, CompareOp, GroupKey, GroupValue,
    PivotFilter, PivotTable, Statistic, aggregate,
};
use crate::engine::schema::fields::*;
use crate::engine::types::ScalarValue;
use crate::engine::unify::JoinDiagnostics;

const INDEX_SAMPLE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BatteryConfig {
    pub top_n: usize,
    /// `number_project` above this counts as overloaded
    pub busy_project_threshold: f64,
    pub focus_department: String,
    pub focus_salary: String,
    pub trace_employees: Vec<EmployeeKey>,
    pub round_places: u32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            busy_project_threshold: 5.0,
            focus_department: "IT".to_string(),
            focus_salary: "low".to_string(),
            trace_employees: Vec::new(),
            round_places: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub columns: Vec<String>,
    pub index_sample: Vec<EmployeeKey>,
    pub join: JoinDiagnostics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryInsights {
    /// Department of each of the `top_n` employees with the most monthly hours
    pub top_employee_departments: Vec<ScalarValue>,
    pub busiest_departments: Vec<RankedGroup>,
    pub focus_projects: FilteredTotalResult,
    pub traced_employees: Vec<TraceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryReport {
    pub dataset: DatasetInfo,
    pub employee_metrics: AggregationResult,
    pub department_hours: PivotTable,
    pub tenure_promotion: PivotTable,
    pub insights: BatteryInsights,
}

/// The fixed set of HR questions asked of every unified dataset.
#[derive(Debug, Clone, Default)]
pub struct InsightBattery {
    config: BatteryConfig,
}

impl InsightBattery {
    pub fn new(config: BatteryConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, table: &UnifiedTable, join: &JoinDiagnostics) -> Result<BatteryReport> {
        let places = self.config.round_places;

        let employee_metrics = aggregate(
            table,
            &employee_metrics_plan(self.config.busy_project_threshold),
        )?
        .rounded(places);
        let department_hours = department_hours_pivot(table, places)?;
        let tenure_promotion = tenure_promotion_pivot(table, places)?;

        let top_employee_departments =
            TopRowsByMeasure::new(AVERAGE_MONTHLY_HOURS, DEPARTMENT, self.config.top_n)
                .run(table)?
                .into_iter()
                .map(|r| r.projected)
                .collect();
        let busiest_departments =
            TopGroupsBySum::new(DEPARTMENT, AVERAGE_MONTHLY_HOURS, self.config.top_n).run(table)?;
        let focus_projects = FilteredTotal::new(Reduce::Sum(NUMBER_PROJECT.to_string()))
            .with(Predicate::equals(DEPARTMENT, self.config.focus_department.as_str()))
            .with(Predicate::equals(SALARY, self.config.focus_salary.as_str()))
            .run(table)?;
        let traced_employees = EmployeeTraceBatch::new(
            self.config.trace_employees.clone(),
            &[LAST_EVALUATION, SATISFACTION_LEVEL],
        )
        .run(table)?;

        info!(
            groups = employee_metrics.len(),
            departments_flagged = department_hours.len(),
            tenures_flagged = tenure_promotion.len(),
            "Insight battery finished"
        );

        Ok(BatteryReport {
            dataset: DatasetInfo {
                rows: table.len(),
                columns: table.columns().to_vec(),
                index_sample: table.keys().take(INDEX_SAMPLE).copied().collect(),
                join: *join,
            },
            employee_metrics,
            department_hours,
            tenure_promotion,
            insights: BatteryInsights {
                top_employee_departments,
                busiest_departments,
                focus_projects,
                traced_employees,
            },
        })
    }
}

/// Metrics by departure status: project load, tenure, accident share, evaluation.
pub fn employee_metrics_plan(busy_project_threshold: f64) -> AggregatePlan {
    AggregatePlan::by([LEFT])
        .measure(
            NUMBER_PROJECT,
            [Statistic::Median, Statistic::CountAbove(busy_project_threshold)],
        )
        .measure(TIME_SPEND_COMPANY, [Statistic::Mean, Statistic::Median])
        .measure(WORK_ACCIDENT, [Statistic::Mean])
        .measure(LAST_EVALUATION, [Statistic::Mean, Statistic::Std])
}

/// Median monthly hours by department × (left, salary), keeping departments
/// where high-paid stayers work less than medium-paid stayers, or low-paid
/// leavers work less than high-paid leavers. Comparisons see rounded values.
pub fn department_hours_pivot(table: &UnifiedTable, round_places: u32) -> Result<PivotTable> {
    let pivot = PivotTable::build(
        table,
        DEPARTMENT,
        &[LEFT, SALARY],
        vec![(AVERAGE_MONTHLY_HOURS, vec![Statistic::Median])],
    )?
    .rounded(round_places);
    let cell = |left: i64, salary: &str| {
        GroupKey::new(vec![GroupValue::Int(left), GroupValue::from(salary)])
    };
    let filter = PivotFilter::Any(vec![
        CellComparison::new(
            AVERAGE_MONTHLY_HOURS,
            Statistic::Median,
            cell(0, "high"),
            CompareOp::Lt,
            cell(0, "medium"),
        ),
        CellComparison::new(
            AVERAGE_MONTHLY_HOURS,
            Statistic::Median,
            cell(1, "low"),
            CompareOp::Lt,
            cell(1, "high"),
        ),
    ]);
    Ok(pivot.filter(&filter))
}

/// Min/max/mean satisfaction and evaluation by tenure × promotion, keeping
/// tenures where the unpromoted are evaluated higher on average.
pub fn tenure_promotion_pivot(table: &UnifiedTable, round_places: u32) -> Result<PivotTable> {
    let stats = vec![Statistic::Min, Statistic::Max, Statistic::Mean];
    let pivot = PivotTable::build(
        table,
        TIME_SPEND_COMPANY,
        &[PROMOTION_LAST_5_YEARS],
        vec![
            (SATISFACTION_LEVEL, stats.clone()),
            (LAST_EVALUATION, stats),
        ],
    )?
    .rounded(round_places);
    let filter = PivotFilter::Any(vec![CellComparison::new(
        LAST_EVALUATION,
        Statistic::Mean,
        vec![0i64],
        CompareOp::Gt,
        vec![1i64],
    )]);
    Ok(pivot.filter(&filter))
}
