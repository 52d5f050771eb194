pub mod aggregate;
pub mod domain;
mod enrich;
pub mod loader;
pub mod presenter;

pub use aggregate::WorkforceAggregates;
pub use domain::{Employee, EmployeeRecord, EmploymentStatus, SiteClass};
pub use enrich::{age_on, Enricher, WorkforceTable};
pub use loader::{DatasetError, EmployeeLoader};
pub use presenter::{query_employees, Dashboard, EmployeePage, EmployeeQuery, TabId};
