use super::domain::{Employee, EmployeeRecord, EmploymentStatus, SiteClass};
use chrono::NaiveDate;
use serde::Serialize;

const DAYS_PER_YEAR: f64 = 365.25;

/// Whole years between `birthdate` and `as_of`, using a 365.25-day year.
/// Leap-day alignment is ignored.
pub fn age_on(birthdate: NaiveDate, as_of: NaiveDate) -> i32 {
    let days = (as_of - birthdate).num_days() as f64;
    (days / DAYS_PER_YEAR).floor() as i32
}

/// Derives age, employment status and site classification for each record.
#[derive(Debug, Clone)]
pub struct Enricher {
    as_of: NaiveDate,
    hq_city: String,
}

impl Enricher {
    pub fn new(as_of: NaiveDate, hq_city: impl Into<String>) -> Self {
        Self {
            as_of,
            hq_city: hq_city.into(),
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn enrich(&self, record: EmployeeRecord) -> Employee {
        let age = age_on(record.birthdate, self.as_of);
        let status = EmploymentStatus::from_termination(record.termination_date);
        let site = SiteClass::classify(&record.city, &self.hq_city);

        Employee {
            record,
            age,
            status,
            site,
        }
    }
}

/// The enriched employee table. Built once at startup and only read afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct WorkforceTable {
    as_of: NaiveDate,
    employees: Vec<Employee>,
}

impl WorkforceTable {
    pub fn build(records: Vec<EmployeeRecord>, enricher: &Enricher) -> Self {
        let employees = records
            .into_iter()
            .map(|record| enricher.enrich(record))
            .collect();

        Self {
            as_of: enricher.as_of(),
            employees,
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
