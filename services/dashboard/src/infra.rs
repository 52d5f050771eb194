use chrono::NaiveDate;
use hr_analytics::config::{parse_delimiter, DatasetConfig};
use hr_analytics::error::AppError;
use hr_analytics::workforce::{
    Dashboard, EmployeeLoader, Enricher, WorkforceAggregates, WorkforceTable,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Immutable report state shared by every request after startup.
#[derive(Clone)]
pub(crate) struct DashboardState {
    pub(crate) table: Arc<WorkforceTable>,
    pub(crate) aggregates: Arc<WorkforceAggregates>,
    pub(crate) dashboard: Arc<Dashboard>,
}

impl DashboardState {
    pub(crate) fn new(table: WorkforceTable) -> Self {
        let aggregates = WorkforceAggregates::compute(&table);
        let dashboard = Dashboard::build(&aggregates);
        Self {
            table: Arc::new(table),
            aggregates: Arc::new(aggregates),
            dashboard: Arc::new(dashboard),
        }
    }
}

/// Reads the configured export and enriches every row as of `as_of`.
pub(crate) fn load_workforce(
    dataset: &DatasetConfig,
    as_of: NaiveDate,
) -> Result<WorkforceTable, AppError> {
    let records = EmployeeLoader::new(dataset.delimiter).load_path(&dataset.path)?;
    let enricher = Enricher::new(as_of, dataset.hq_city.clone());
    Ok(WorkforceTable::build(records, &enricher))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_delimiter_arg(raw: &str) -> Result<u8, String> {
    parse_delimiter(raw).map_err(|err| err.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dashboard_state_precomputes_aggregates() {
        let state = fixtures::sample_state();
        assert_eq!(state.table.len(), 3);
        assert_eq!(state.aggregates.headcount.active, 2);
        assert_eq!(state.aggregates.headcount.terminated, 1);
        assert_eq!(state.dashboard.tabs.len(), 4);
    }

    #[test]
    fn load_workforce_reports_missing_file() {
        let dataset = DatasetConfig {
            path: PathBuf::from("does/not/exist.csv"),
            ..DatasetConfig::default()
        };
        let err = load_workforce(&dataset, fixtures::as_of()).expect_err("missing file");
        assert!(matches!(err, AppError::Dataset(_)));
    }

    #[test]
    fn parse_date_expects_iso_format() {
        assert_eq!(parse_date(" 2025-01-01 "), Ok(fixtures::as_of()));
        assert!(parse_date("01/01/2025").is_err());
    }

    #[test]
    fn parse_delimiter_arg_wraps_config_error() {
        assert_eq!(parse_delimiter_arg(","), Ok(b','));
        let message = parse_delimiter_arg("ab").expect_err("two characters");
        assert!(message.contains("single ASCII character"));
    }
}
