use super::bands::AgeBand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadcountSummary {
    pub total_hired: usize,
    pub active: usize,
    pub terminated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count for a two-level grouping such as (state, city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub outer: String,
    pub inner: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBandCount {
    pub band: AgeBand,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairMean {
    pub outer: String,
    pub inner: String,
    pub mean: f64,
    pub count: usize,
}

/// Five-number salary summary for one (education level, gender) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDistribution {
    pub education_level: String,
    pub gender: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSalaryPoint {
    pub employee_id: String,
    pub department: String,
    pub age: i32,
    pub salary: f64,
}
