use super::dates::{parse_day_first, parse_salary};
use super::DatasetError;
use crate::workforce::domain::EmployeeRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub const REQUIRED_COLUMNS: [&str; 14] = [
    "Employee_ID",
    "First Name",
    "Last Name",
    "Department",
    "Job Title",
    "Gender",
    "Birthdate",
    "Hiredate",
    "Termdate",
    "City",
    "State",
    "Education Level",
    "Performance Rating",
    "Salary",
];

pub(crate) fn parse_records<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<EmployeeRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader.headers()?.iter().map(clean_header).collect();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|position| position.line()).unwrap_or(0);
        let row: EmployeeRow = raw.deserialize(Some(&headers))?;
        records.push(row.into_record(line)?);
    }

    Ok(records)
}

fn clean_header(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_string()
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Employee_ID")]
    employee_id: String,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Job Title")]
    job_title: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Birthdate")]
    birthdate: String,
    #[serde(rename = "Hiredate")]
    hire_date: String,
    #[serde(rename = "Termdate", default, deserialize_with = "empty_string_as_none")]
    termination_date: Option<String>,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Education Level")]
    education_level: String,
    #[serde(rename = "Performance Rating")]
    performance_rating: String,
    #[serde(rename = "Salary")]
    salary: String,
}

impl EmployeeRow {
    fn into_record(self, line: u64) -> Result<EmployeeRecord, DatasetError> {
        let birthdate = required_date(&self.birthdate, "Birthdate", line)?;
        let hire_date = required_date(&self.hire_date, "Hiredate", line)?;
        // Anything in Termdate that is not a date means the employee is still on staff.
        let termination_date = self.termination_date.as_deref().and_then(parse_day_first);
        let salary = parse_salary(&self.salary).ok_or_else(|| DatasetError::InvalidSalary {
            line,
            value: self.salary.clone(),
        })?;

        Ok(EmployeeRecord {
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            job_title: self.job_title,
            gender: self.gender,
            birthdate,
            hire_date,
            termination_date,
            city: self.city,
            state: self.state,
            education_level: self.education_level,
            performance_rating: self.performance_rating,
            salary,
        })
    }
}

fn required_date(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<chrono::NaiveDate, DatasetError> {
    parse_day_first(value).ok_or_else(|| DatasetError::InvalidDate {
        line,
        column,
        value: value.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
