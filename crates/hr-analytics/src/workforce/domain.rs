use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One typed row of the employee export, as validated by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub job_title: String,
    pub gender: String,
    pub birthdate: NaiveDate,
    pub hire_date: NaiveDate,
    pub termination_date: Option<NaiveDate>,
    pub city: String,
    pub state: String,
    pub education_level: String,
    pub performance_rating: String,
    pub salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    Terminated,
}

impl EmploymentStatus {
    pub const fn from_termination(termination_date: Option<NaiveDate>) -> Self {
        match termination_date {
            Some(_) => Self::Terminated,
            None => Self::Active,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headquarters versus branch office classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteClass {
    Hq,
    Branch,
}

impl SiteClass {
    pub fn classify(city: &str, hq_city: &str) -> Self {
        if city == hq_city {
            Self::Hq
        } else {
            Self::Branch
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hq => "HQ",
            Self::Branch => "Branch",
        }
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record together with the columns derived from it at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub age: i32,
    pub status: EmploymentStatus,
    pub site: SiteClass,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.record.first_name, self.record.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_termination_presence() {
        assert_eq!(
            EmploymentStatus::from_termination(None),
            EmploymentStatus::Active
        );
        let date = NaiveDate::from_ymd_opt(2020, 3, 15).expect("valid date");
        assert_eq!(
            EmploymentStatus::from_termination(Some(date)),
            EmploymentStatus::Terminated
        );
    }

    #[test]
    fn site_classification_is_exact_match() {
        assert_eq!(
            SiteClass::classify("New York City", "New York City"),
            SiteClass::Hq
        );
        assert_eq!(
            SiteClass::classify("new york city", "New York City"),
            SiteClass::Branch
        );
        assert_eq!(SiteClass::classify("Boston", "New York City"), SiteClass::Branch);
        assert_eq!(SiteClass::Hq.to_string(), "HQ");
    }
}
