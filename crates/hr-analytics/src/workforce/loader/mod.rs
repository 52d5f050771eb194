mod dates;
mod parser;

use crate::workforce::domain::EmployeeRecord;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use parser::REQUIRED_COLUMNS;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read employee dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid employee CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{column}' is missing from the header")]
    MissingColumn { column: String },
    #[error("line {line}: column '{column}' holds unparseable date '{value}'")]
    InvalidDate {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: salary '{value}' is not a number")]
    InvalidSalary { line: u64, value: String },
}

/// Reads the delimited employee export into typed records.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeLoader {
    delimiter: u8,
}

impl Default for EmployeeLoader {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DELIMITER)
    }
}

impl EmployeeLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<EmployeeRecord>, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let records = self.load_reader(file)?;
        debug!(path = %path.display(), rows = records.len(), "employee dataset loaded");
        Ok(records)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<EmployeeRecord>, DatasetError> {
        parser::parse_records(reader, self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "Employee_ID;First Name;Last Name;Department;Job Title;Gender;Birthdate;Hiredate;Termdate;City;State;Education Level;Performance Rating;Salary\n";

    fn load(body: &str) -> Result<Vec<EmployeeRecord>, DatasetError> {
        let csv = format!("{HEADER}{body}");
        EmployeeLoader::default().load_reader(Cursor::new(csv))
    }

    #[test]
    fn parses_typed_rows_with_day_first_dates() {
        let records = load(
            "00-1;Ada;Lovelace;IT;Engineer;Female;10/12/1985;03/04/2015;15/03/2020;New York City;New York;Master;Excellent;95000\n",
        )
        .expect("row parses");

        let record = &records[0];
        assert_eq!(record.employee_id, "00-1");
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.job_title, "Engineer");
        assert_eq!(
            record.birthdate,
            NaiveDate::from_ymd_opt(1985, 12, 10).unwrap()
        );
        assert_eq!(record.hire_date, NaiveDate::from_ymd_opt(2015, 4, 3).unwrap());
        assert_eq!(
            record.termination_date,
            Some(NaiveDate::from_ymd_opt(2020, 3, 15).unwrap())
        );
        assert_eq!(record.salary, 95000.0);
    }

    #[test]
    fn blank_or_garbage_termination_dates_mean_still_employed() {
        let records = load(
            "1;A;B;HR;Clerk;Male;01/01/1990;01/06/2018;;Boston;Massachusetts;Bachelor;Good;50000\n\
2;C;D;HR;Clerk;Male;01/01/1990;01/06/2018;pending;Boston;Massachusetts;Bachelor;Good;50000\n",
        )
        .expect("rows parse");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record.termination_date.is_none()));
    }

    #[test]
    fn header_only_file_yields_no_records() {
        let records = load("").expect("header only parses");
        assert!(records.is_empty());
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let csv = "Employee_ID;First Name\n1;Ada\n";
        let error = EmployeeLoader::default()
            .load_reader(Cursor::new(csv))
            .expect_err("missing columns rejected");

        match error {
            DatasetError::MissingColumn { column } => assert_eq!(column, "Last Name"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_birthdate_fails_with_line_and_column() {
        let error = load(
            "1;A;B;HR;Clerk;Male;yesterday;01/06/2018;;Boston;Massachusetts;Bachelor;Good;50000\n",
        )
        .expect_err("bad birthdate rejected");

        match error {
            DatasetError::InvalidDate {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Birthdate");
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_hire_date_names_the_hiredate_column() {
        let error = load(
            "1;A;B;HR;Clerk;Male;01/01/1990;31/02/2018;;Boston;Massachusetts;Bachelor;Good;50000\n",
        )
        .expect_err("bad hire date rejected");

        match error {
            DatasetError::InvalidDate { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Hiredate");
                assert_eq!(value, "31/02/2018");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_fail_as_csv_errors() {
        let error = load("1;A;B;HR\n").expect_err("short row rejected");
        assert!(matches!(error, DatasetError::Csv(_)), "got {error:?}");
    }

    #[test]
    fn required_columns_cover_every_record_field() {
        assert_eq!(REQUIRED_COLUMNS.len(), 14);
        assert_eq!(REQUIRED_COLUMNS[0], "Employee_ID");
        assert!(REQUIRED_COLUMNS.contains(&"Termdate"));
    }

    #[test]
    fn unparseable_salary_is_rejected() {
        let error = load(
            "1;A;B;HR;Clerk;Male;01/01/1990;01/06/2018;;Boston;Massachusetts;Bachelor;Good;lots\n",
        )
        .expect_err("bad salary rejected");

        assert!(matches!(error, DatasetError::InvalidSalary { line: 2, .. }));
    }

    #[test]
    fn header_byte_order_mark_and_extra_columns_are_tolerated() {
        let csv = format!(
            "\u{feff}{}",
            HEADER.replace("Salary\n", "Salary;Notes\n")
        ) + "1;A;B;HR;Clerk;Male;01/01/1990;01/06/2018;;Boston;Massachusetts;Bachelor;Good;50000;ok\n";
        let records = EmployeeLoader::default()
            .load_reader(Cursor::new(csv))
            .expect("bom header parses");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "1");
    }

    #[test]
    fn custom_delimiter_is_honoured() {
        let csv = HEADER.replace(';', ",")
            + "1,A,B,HR,Clerk,Male,01/01/1990,01/06/2018,,Boston,Massachusetts,Bachelor,Good,50000\n";
        let records = EmployeeLoader::new(b',')
            .load_reader(Cursor::new(csv))
            .expect("comma delimited parses");
        assert_eq!(records[0].city, "Boston");
    }

    #[test]
    fn load_path_propagates_io_errors() {
        let error = EmployeeLoader::default()
            .load_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            DatasetError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
