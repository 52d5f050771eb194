mod bands;
mod counts;
mod income;
pub mod views;

use super::enrich::WorkforceTable;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub use bands::AgeBand;
pub use views::{
    AgeBandCount, AgeSalaryPoint, CategoryCount, HeadcountSummary, PairCount, PairMean,
    SalaryDistribution, YearCount,
};

/// Every grouping the report tabs are drawn from.
#[derive(Debug, Clone, Serialize)]
pub struct WorkforceAggregates {
    pub as_of: NaiveDate,
    pub headcount: HeadcountSummary,
    pub hires_per_year: Vec<YearCount>,
    pub terminations_per_year: Vec<YearCount>,
    pub by_department: Vec<CategoryCount>,
    pub by_site: Vec<CategoryCount>,
    pub by_gender: Vec<CategoryCount>,
    pub by_education: Vec<CategoryCount>,
    pub by_state_city: Vec<PairCount>,
    pub by_age_band: Vec<AgeBandCount>,
    pub education_performance: Vec<PairCount>,
    pub mean_salary_by_education_gender: Vec<PairMean>,
    pub salary_distribution: Vec<SalaryDistribution>,
    pub age_salary_points: Vec<AgeSalaryPoint>,
}

impl WorkforceAggregates {
    pub fn compute(table: &WorkforceTable) -> Self {
        let employees = table.employees();

        Self {
            as_of: table.as_of(),
            headcount: counts::headcount(employees),
            hires_per_year: counts::per_year(employees, |employee| {
                Some(employee.record.hire_date.year())
            }),
            terminations_per_year: counts::per_year(employees, |employee| {
                employee.record.termination_date.map(|date| date.year())
            }),
            by_department: counts::category_counts(employees, |employee| {
                employee.record.department.as_str()
            }),
            by_site: counts::category_counts(employees, |employee| employee.site.label()),
            by_gender: counts::category_counts(employees, |employee| {
                employee.record.gender.as_str()
            }),
            by_education: counts::category_counts(employees, |employee| {
                employee.record.education_level.as_str()
            }),
            by_state_city: counts::pair_counts(
                employees,
                |employee| employee.record.state.as_str(),
                |employee| employee.record.city.as_str(),
            ),
            by_age_band: counts::age_band_counts(employees),
            education_performance: counts::pair_counts(
                employees,
                |employee| employee.record.education_level.as_str(),
                |employee| employee.record.performance_rating.as_str(),
            ),
            mean_salary_by_education_gender: income::mean_salary_by(
                employees,
                |employee| employee.record.education_level.as_str(),
                |employee| employee.record.gender.as_str(),
            ),
            salary_distribution: income::salary_distributions(employees),
            age_salary_points: income::age_salary_points(employees),
        }
    }
}
