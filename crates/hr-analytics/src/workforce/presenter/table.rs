use crate::workforce::domain::Employee;
use crate::workforce::enrich::WorkforceTable;
use serde::Serialize;
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 15;

/// Columns exposed by the employee records table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeColumn {
    EmployeeId,
    FirstName,
    LastName,
    Department,
    JobTitle,
    Gender,
    Age,
    EducationLevel,
    Salary,
    Status,
}

impl EmployeeColumn {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::EmployeeId,
            Self::FirstName,
            Self::LastName,
            Self::Department,
            Self::JobTitle,
            Self::Gender,
            Self::Age,
            Self::EducationLevel,
            Self::Salary,
            Self::Status,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::EmployeeId => "employee_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Department => "department",
            Self::JobTitle => "job_title",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::EducationLevel => "education_level",
            Self::Salary => "salary",
            Self::Status => "status",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee_ID",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Department => "Department",
            Self::JobTitle => "Job Title",
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::EducationLevel => "Education Level",
            Self::Salary => "Salary",
            Self::Status => "Status",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Age | Self::Salary)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|column| column.key() == key)
    }

    fn text(self, employee: &Employee) -> &str {
        let record = &employee.record;
        match self {
            Self::EmployeeId => &record.employee_id,
            Self::FirstName => &record.first_name,
            Self::LastName => &record.last_name,
            Self::Department => &record.department,
            Self::JobTitle => &record.job_title,
            Self::Gender => &record.gender,
            Self::EducationLevel => &record.education_level,
            Self::Status => employee.status.label(),
            Self::Age | Self::Salary => "",
        }
    }

    fn number(self, employee: &Employee) -> f64 {
        match self {
            Self::Age => f64::from(employee.age),
            Self::Salary => employee.record.salary,
            _ => 0.0,
        }
    }

    fn compare(self, left: &Employee, right: &Employee) -> Ordering {
        if self.is_numeric() {
            self.number(left).total_cmp(&self.number(right))
        } else {
            self.text(left).cmp(self.text(right))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub column: EmployeeColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Lt => left < right,
            Self::Le => left <= right,
            Self::Gt => left > right,
            Self::Ge => left >= right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FilterExpr {
    Contains(String),
    Compare(Comparison, f64),
    Unmatchable,
}

impl FilterExpr {
    fn parse(column: EmployeeColumn, raw: &str) -> Self {
        if !column.is_numeric() {
            return Self::Contains(raw.to_lowercase());
        }

        // Two-character operators first so `>=` is not read as `>` followed by `=5`.
        let operators = [
            (">=", Comparison::Ge),
            ("<=", Comparison::Le),
            ("!=", Comparison::Ne),
            (">", Comparison::Gt),
            ("<", Comparison::Lt),
            ("=", Comparison::Eq),
        ];
        let (comparison, operand) = operators
            .iter()
            .find_map(|(prefix, comparison)| {
                raw.strip_prefix(prefix).map(|rest| (*comparison, rest))
            })
            .unwrap_or((Comparison::Eq, raw));

        match operand.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Compare(comparison, value),
            _ => Self::Unmatchable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column: EmployeeColumn,
    pub raw: String,
    expr: FilterExpr,
}

impl ColumnFilter {
    pub fn new(column: EmployeeColumn, raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let expr = FilterExpr::parse(column, &raw);
        Self { column, raw, expr }
    }

    fn matches(&self, employee: &Employee) -> bool {
        match &self.expr {
            FilterExpr::Contains(needle) => self
                .column
                .text(employee)
                .to_lowercase()
                .contains(needle.as_str()),
            FilterExpr::Compare(comparison, value) => {
                comparison.holds(self.column.number(employee), *value)
            }
            FilterExpr::Unmatchable => false,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("sort direction must be 'asc' or 'desc', got '{0}'")]
    InvalidDirection(String),
    #[error("page must be a positive integer, got '{0}'")]
    InvalidPage(String),
}

/// Filter, sort and page request against the employee table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeQuery {
    pub filters: Vec<ColumnFilter>,
    pub sort: Option<SortKey>,
    pub page: usize,
}

impl EmployeeQuery {
    /// Reads `filter_<column>`, `sort`, `dir` and `page` parameters and
    /// ignores anything else.
    pub fn from_params<'a, I>(params: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        let mut sort_column = None;
        let mut direction = SortDirection::Ascending;

        for (name, value) in params {
            match name {
                "sort" => {
                    if !value.trim().is_empty() {
                        sort_column = Some(parse_column(value.trim())?);
                    }
                }
                "dir" => {
                    direction = match value.trim() {
                        "" | "asc" => SortDirection::Ascending,
                        "desc" => SortDirection::Descending,
                        other => return Err(QueryError::InvalidDirection(other.to_string())),
                    };
                }
                "page" => {
                    query.page = value
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| QueryError::InvalidPage(value.to_string()))?;
                }
                _ => {
                    if let Some(key) = name.strip_prefix("filter_") {
                        let column = parse_column(key)?;
                        if !value.trim().is_empty() {
                            query.filters.push(ColumnFilter::new(column, value));
                        }
                    }
                }
            }
        }

        query.filters.sort_by_key(|filter| filter.column as u8);
        query.sort = sort_column.map(|column| SortKey { column, direction });
        Ok(query)
    }

    pub fn with_filter(mut self, column: EmployeeColumn, raw: &str) -> Self {
        self.filters.retain(|filter| filter.column != column);
        if !raw.trim().is_empty() {
            self.filters.push(ColumnFilter::new(column, raw));
        }
        self
    }

    pub fn sorted_by(mut self, column: EmployeeColumn, direction: SortDirection) -> Self {
        self.sort = Some(SortKey { column, direction });
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn filter_value(&self, column: EmployeeColumn) -> Option<&str> {
        self.filters
            .iter()
            .find(|filter| filter.column == column)
            .map(|filter| filter.raw.as_str())
    }

    /// Parameters reproducing this query, used to build table links.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|filter| (format!("filter_{}", filter.column.key()), filter.raw.clone()))
            .collect();

        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.column.key().to_string()));
            params.push(("dir".to_string(), sort.direction.key().to_string()));
        }
        if self.page > 1 {
            params.push(("page".to_string(), self.page.to_string()));
        }

        params
    }
}

fn parse_column(key: &str) -> Result<EmployeeColumn, QueryError> {
    EmployeeColumn::from_key(key).ok_or_else(|| QueryError::UnknownColumn(key.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRowView {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub job_title: String,
    pub gender: String,
    pub age: i32,
    pub education_level: String,
    pub salary: f64,
    pub status: &'static str,
}

impl EmployeeRowView {
    fn from_employee(employee: &Employee) -> Self {
        let record = &employee.record;
        Self {
            employee_id: record.employee_id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            department: record.department.clone(),
            job_title: record.job_title.clone(),
            gender: record.gender.clone(),
            age: employee.age,
            education_level: record.education_level.clone(),
            salary: record.salary,
            status: employee.status.label(),
        }
    }

    pub fn cell(&self, column: EmployeeColumn) -> String {
        match column {
            EmployeeColumn::EmployeeId => self.employee_id.clone(),
            EmployeeColumn::FirstName => self.first_name.clone(),
            EmployeeColumn::LastName => self.last_name.clone(),
            EmployeeColumn::Department => self.department.clone(),
            EmployeeColumn::JobTitle => self.job_title.clone(),
            EmployeeColumn::Gender => self.gender.clone(),
            EmployeeColumn::Age => self.age.to_string(),
            EmployeeColumn::EducationLevel => self.education_level.clone(),
            EmployeeColumn::Salary => self.salary.to_string(),
            EmployeeColumn::Status => self.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePage {
    pub rows: Vec<EmployeeRowView>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_matches: usize,
}

/// Applies `query` to the table. Pure: the same inputs always give the same page.
pub fn query_employees(table: &WorkforceTable, query: &EmployeeQuery) -> EmployeePage {
    let mut matches: Vec<&Employee> = table
        .employees()
        .iter()
        .filter(|employee| query.filters.iter().all(|filter| filter.matches(employee)))
        .collect();

    if let Some(sort) = query.sort {
        matches.sort_by(|left, right| match sort.direction {
            SortDirection::Ascending => sort.column.compare(left, right),
            SortDirection::Descending => sort.column.compare(right, left),
        });
    }

    let total_matches = matches.len();
    let page_count = total_matches.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, page_count);
    let rows = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .map(EmployeeRowView::from_employee)
        .collect();

    EmployeePage {
        rows,
        page,
        page_count,
        page_size: PAGE_SIZE,
        total_matches,
    }
}
