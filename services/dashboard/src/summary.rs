use crate::infra::load_workforce;
use chrono::{Local, NaiveDate};
use clap::Args;
use hr_analytics::config::AppConfig;
use hr_analytics::error::AppError;
use hr_analytics::workforce::aggregate::{CategoryCount, PairCount, YearCount};
use hr_analytics::workforce::WorkforceAggregates;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    /// Employee CSV export (defaults to APP_DATASET_PATH)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Field delimiter of the export (single character)
    #[arg(long, value_parser = crate::infra::parse_delimiter_arg)]
    pub(crate) delimiter: Option<u8>,
    /// Reference date for ages (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// City treated as headquarters (defaults to APP_HQ_CITY)
    #[arg(long)]
    pub(crate) hq_city: Option<String>,
}

pub(crate) fn run_summary(mut args: SummaryArgs) -> Result<(), AppError> {
    let mut dataset = AppConfig::load()?.dataset;
    if let Some(path) = args.dataset.take() {
        dataset.path = path;
    }
    if let Some(delimiter) = args.delimiter.take() {
        dataset.delimiter = delimiter;
    }
    if let Some(hq_city) = args.hq_city.take() {
        dataset.hq_city = hq_city;
    }

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let table = load_workforce(&dataset, as_of)?;
    let aggregates = WorkforceAggregates::compute(&table);

    println!("Dataset: {}", dataset.path.display());
    print!("{}", render_summary(&aggregates));
    Ok(())
}

pub(crate) fn render_summary(aggregates: &WorkforceAggregates) -> String {
    let mut out = String::new();
    let headcount = aggregates.headcount;

    writeln!(out, "HR analytics summary as of {}", aggregates.as_of).expect("write header");
    writeln!(out, "  Total hired: {}", headcount.total_hired).expect("write total");
    writeln!(out, "  Active:      {}", headcount.active).expect("write active");
    writeln!(out, "  Terminated:  {}", headcount.terminated).expect("write terminated");

    write_years(&mut out, "Hires per year", &aggregates.hires_per_year);
    write_years(&mut out, "Terminations per year", &aggregates.terminations_per_year);
    write_categories(&mut out, "Employees by department", &aggregates.by_department);
    write_categories(&mut out, "HQ vs branches", &aggregates.by_site);
    write_pairs(&mut out, "Employees by state and city", &aggregates.by_state_city);
    write_categories(&mut out, "Gender ratio", &aggregates.by_gender);

    writeln!(out, "\nEmployees by age group").expect("write section");
    if aggregates.by_age_band.is_empty() {
        out.push_str("  (none)\n");
    }
    for band in &aggregates.by_age_band {
        writeln!(out, "  {}: {}", band.label, band.count).expect("write age band");
    }

    write_categories(&mut out, "Employees by education level", &aggregates.by_education);
    write_pairs(
        &mut out,
        "Education level vs performance rating",
        &aggregates.education_performance,
    );

    writeln!(out, "\nMean salary by education level and gender").expect("write section");
    if aggregates.mean_salary_by_education_gender.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in &aggregates.mean_salary_by_education_gender {
        writeln!(
            out,
            "  {} / {}: {:.2} ({} employees)",
            entry.outer, entry.inner, entry.mean, entry.count
        )
        .expect("write mean salary");
    }

    out
}

fn write_years(out: &mut String, title: &str, years: &[YearCount]) {
    writeln!(out, "\n{title}").expect("write section");
    if years.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in years {
        writeln!(out, "  {}: {}", entry.year, entry.count).expect("write year");
    }
}

fn write_categories(out: &mut String, title: &str, counts: &[CategoryCount]) {
    writeln!(out, "\n{title}").expect("write section");
    if counts.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in counts {
        writeln!(out, "  {}: {}", entry.label, entry.count).expect("write category");
    }
}

fn write_pairs(out: &mut String, title: &str, pairs: &[PairCount]) {
    writeln!(out, "\n{title}").expect("write section");
    if pairs.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in pairs {
        writeln!(out, "  {} / {}: {}", entry.outer, entry.inner, entry.count).expect("write pair");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::fixtures::{as_of, sample_state};
    use crate::infra::DashboardState;
    use hr_analytics::workforce::{Enricher, WorkforceTable};

    #[test]
    fn summary_lists_headcount_and_groupings() {
        let state = sample_state();
        let text = render_summary(&state.aggregates);

        assert!(text.starts_with("HR analytics summary as of 2025-01-01\n"));
        assert!(text.contains("  Total hired: 3\n"));
        assert!(text.contains("  Active:      2\n"));
        assert!(text.contains("  Terminated:  1\n"));
        assert!(text.contains("Terminations per year\n  2020: 1\n"));
        assert!(text.contains("Employees by department\n  IT: 2\n  Sales: 1\n"));
        assert!(text.contains("HQ vs branches\n  Branch: 2\n  HQ: 1\n"));
        assert!(text.contains("  Illinois / Chicago: 1\n"));
    }

    #[test]
    fn summary_of_empty_dataset_prints_placeholders() {
        let table = WorkforceTable::build(Vec::new(), &Enricher::new(as_of(), "New York City"));
        let state = DashboardState::new(table);
        let text = render_summary(&state.aggregates);

        assert!(text.contains("  Total hired: 0\n"));
        assert!(text.contains("Employees by age group\n  (none)\n"));
    }
}
