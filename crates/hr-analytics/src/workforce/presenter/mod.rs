mod figures;
mod html;
mod table;

use super::aggregate::WorkforceAggregates;
use serde::Serialize;
use serde_json::Value;

pub use html::{render_dashboard_page, RecordsView};
pub use table::{
    query_employees, ColumnFilter, EmployeeColumn, EmployeePage, EmployeeQuery, EmployeeRowView,
    QueryError, SortDirection, SortKey, PAGE_SIZE,
};

pub const DASHBOARD_TITLE: &str = "HR Analytics Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Overview,
    Demographics,
    IncomeAnalysis,
    EmployeeRecords,
}

impl TabId {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Overview,
            Self::Demographics,
            Self::IncomeAnalysis,
            Self::EmployeeRecords,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Demographics => "Demographics",
            Self::IncomeAnalysis => "Income Analysis",
            Self::EmployeeRecords => "Employee Records",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Demographics => "demographics",
            Self::IncomeAnalysis => "income",
            Self::EmployeeRecords => "records",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|tab| tab.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Box,
    Scatter,
    Sunburst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetWidth {
    Full,
    Half,
}

/// Plotly-compatible figure: a list of traces plus a layout object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub width: WidgetWidth,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub numeric: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub id: &'static str,
    pub columns: Vec<TableColumnSpec>,
    pub page_size: usize,
    pub sortable: bool,
    pub filterable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    KpiCards { cards: Vec<KpiCard> },
    Chart(ChartSpec),
    Table(TableSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub id: TabId,
    pub label: &'static str,
    pub widgets: Vec<Widget>,
}

/// Declarative description of the whole report page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    pub tabs: Vec<Tab>,
}

impl Dashboard {
    pub fn build(aggregates: &WorkforceAggregates) -> Self {
        let tabs = TabId::ordered()
            .into_iter()
            .map(|id| Tab {
                id,
                label: id.label(),
                widgets: widgets_for(id, aggregates),
            })
            .collect();

        Self {
            title: DASHBOARD_TITLE,
            tabs,
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }
}

fn chart(
    id: &'static str,
    title: &'static str,
    kind: ChartKind,
    width: WidgetWidth,
    figure: Figure,
) -> Widget {
    Widget::Chart(ChartSpec {
        id,
        title,
        kind,
        width,
        figure,
    })
}

fn widgets_for(tab: TabId, aggregates: &WorkforceAggregates) -> Vec<Widget> {
    match tab {
        TabId::Overview => overview_widgets(aggregates),
        TabId::Demographics => demographics_widgets(aggregates),
        TabId::IncomeAnalysis => income_widgets(aggregates),
        TabId::EmployeeRecords => vec![Widget::Table(employee_table_spec())],
    }
}

fn overview_widgets(aggregates: &WorkforceAggregates) -> Vec<Widget> {
    let headcount = aggregates.headcount;
    vec![
        Widget::KpiCards {
            cards: vec![
                KpiCard {
                    label: "Total Hired",
                    value: headcount.total_hired,
                },
                KpiCard {
                    label: "Active",
                    value: headcount.active,
                },
                KpiCard {
                    label: "Terminated",
                    value: headcount.terminated,
                },
            ],
        },
        chart(
            "hires-per-year",
            "Hires per Year",
            ChartKind::Bar,
            WidgetWidth::Full,
            figures::yearly_bar(&aggregates.hires_per_year, "Hires per Year", "Hires"),
        ),
        chart(
            "terminations-per-year",
            "Terminations per Year",
            ChartKind::Bar,
            WidgetWidth::Full,
            figures::yearly_bar(
                &aggregates.terminations_per_year,
                "Terminations per Year",
                "Terminations",
            ),
        ),
        chart(
            "employees-by-department",
            "Employees by Department",
            ChartKind::Pie,
            WidgetWidth::Half,
            figures::category_pie(&aggregates.by_department, "Employees by Department"),
        ),
        chart(
            "hq-vs-branches",
            "HQ vs Branches",
            ChartKind::Pie,
            WidgetWidth::Half,
            figures::category_pie(&aggregates.by_site, "HQ vs Branches"),
        ),
        chart(
            "city-state-distribution",
            "Distribution by City & State",
            ChartKind::Sunburst,
            WidgetWidth::Full,
            figures::pair_sunburst(&aggregates.by_state_city, "Distribution by City & State"),
        ),
    ]
}

fn demographics_widgets(aggregates: &WorkforceAggregates) -> Vec<Widget> {
    vec![
        chart(
            "gender-ratio",
            "Gender Ratio",
            ChartKind::Pie,
            WidgetWidth::Half,
            figures::category_pie(&aggregates.by_gender, "Gender Ratio"),
        ),
        chart(
            "employees-by-age-group",
            "Employees by Age Group",
            ChartKind::Bar,
            WidgetWidth::Half,
            figures::labelled_bar(
                aggregates.by_age_band.iter().map(|entry| entry.label).collect(),
                aggregates.by_age_band.iter().map(|entry| entry.count).collect(),
                "Employees by Age Group",
                "Age Group",
            ),
        ),
        chart(
            "employees-by-education",
            "Employees by Education Level",
            ChartKind::Bar,
            WidgetWidth::Full,
            figures::category_bar(
                &aggregates.by_education,
                "Employees by Education Level",
                "Education Level",
            ),
        ),
        chart(
            "education-vs-performance",
            "Education vs Performance",
            ChartKind::Sunburst,
            WidgetWidth::Full,
            figures::pair_sunburst(&aggregates.education_performance, "Education vs Performance"),
        ),
    ]
}

fn income_widgets(aggregates: &WorkforceAggregates) -> Vec<Widget> {
    vec![
        chart(
            "salary-by-education-gender",
            "Salary by Education & Gender",
            ChartKind::Box,
            WidgetWidth::Full,
            figures::salary_box(&aggregates.salary_distribution, "Salary by Education & Gender"),
        ),
        chart(
            "age-vs-salary",
            "Age vs Salary by Department",
            ChartKind::Scatter,
            WidgetWidth::Full,
            figures::age_salary_scatter(
                &aggregates.age_salary_points,
                "Age vs Salary by Department",
            ),
        ),
    ]
}

fn employee_table_spec() -> TableSpec {
    TableSpec {
        id: "employee-table",
        columns: EmployeeColumn::ordered()
            .into_iter()
            .map(|column| TableColumnSpec {
                key: column.key(),
                label: column.label(),
                numeric: column.is_numeric(),
            })
            .collect(),
        page_size: PAGE_SIZE,
        sortable: true,
        filterable: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::aggregate::{HeadcountSummary, WorkforceAggregates};
    use chrono::NaiveDate;

    fn empty_aggregates() -> WorkforceAggregates {
        WorkforceAggregates {
            as_of: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            headcount: HeadcountSummary::default(),
            hires_per_year: Vec::new(),
            terminations_per_year: Vec::new(),
            by_department: Vec::new(),
            by_site: Vec::new(),
            by_gender: Vec::new(),
            by_education: Vec::new(),
            by_state_city: Vec::new(),
            by_age_band: Vec::new(),
            education_performance: Vec::new(),
            mean_salary_by_education_gender: Vec::new(),
            salary_distribution: Vec::new(),
            age_salary_points: Vec::new(),
        }
    }

    fn chart_titles(tab: &Tab) -> Vec<&'static str> {
        tab.widgets
            .iter()
            .filter_map(|widget| match widget {
                Widget::Chart(chart) => Some(chart.title),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dashboard_has_four_tabs_in_order() {
        let dashboard = Dashboard::build(&empty_aggregates());
        let labels: Vec<&str> = dashboard.tabs.iter().map(|tab| tab.label).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Demographics", "Income Analysis", "Employee Records"]
        );
        assert_eq!(dashboard.title, "HR Analytics Dashboard");
    }

    #[test]
    fn overview_starts_with_zeroed_kpis_for_empty_data() {
        let dashboard = Dashboard::build(&empty_aggregates());
        let overview = dashboard.tab(TabId::Overview).expect("overview tab");

        match &overview.widgets[0] {
            Widget::KpiCards { cards } => {
                let values: Vec<usize> = cards.iter().map(|card| card.value).collect();
                assert_eq!(values, vec![0, 0, 0]);
            }
            other => panic!("expected KPI cards, got {other:?}"),
        }
        assert_eq!(
            chart_titles(overview),
            vec![
                "Hires per Year",
                "Terminations per Year",
                "Employees by Department",
                "HQ vs Branches",
                "Distribution by City & State",
            ]
        );
    }

    #[test]
    fn demographics_and_income_tabs_carry_their_charts() {
        let dashboard = Dashboard::build(&empty_aggregates());
        assert_eq!(
            chart_titles(dashboard.tab(TabId::Demographics).expect("tab")),
            vec![
                "Gender Ratio",
                "Employees by Age Group",
                "Employees by Education Level",
                "Education vs Performance",
            ]
        );
        assert_eq!(
            chart_titles(dashboard.tab(TabId::IncomeAnalysis).expect("tab")),
            vec!["Salary by Education & Gender", "Age vs Salary by Department"]
        );
    }

    #[test]
    fn records_tab_declares_the_table_projection() {
        let dashboard = Dashboard::build(&empty_aggregates());
        let records = dashboard.tab(TabId::EmployeeRecords).expect("records tab");

        match &records.widgets[0] {
            Widget::Table(spec) => {
                let labels: Vec<&str> = spec.columns.iter().map(|column| column.label).collect();
                assert_eq!(
                    labels,
                    vec![
                        "Employee_ID",
                        "First Name",
                        "Last Name",
                        "Department",
                        "Job Title",
                        "Gender",
                        "Age",
                        "Education Level",
                        "Salary",
                        "Status",
                    ]
                );
                assert_eq!(spec.page_size, 15);
                assert!(spec.sortable && spec.filterable);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn widgets_serialize_with_type_tags() {
        let dashboard = Dashboard::build(&empty_aggregates());
        let json = serde_json::to_value(&dashboard).expect("dashboard serializes");
        assert_eq!(json["tabs"][0]["id"], "overview");
        assert_eq!(json["tabs"][0]["widgets"][0]["type"], "kpi_cards");
        assert_eq!(json["tabs"][0]["widgets"][1]["type"], "chart");
        assert_eq!(json["tabs"][0]["widgets"][1]["kind"], "bar");
        assert_eq!(json["tabs"][3]["widgets"][0]["type"], "table");
    }

    #[test]
    fn tab_slugs_round_trip() {
        for tab in TabId::ordered() {
            assert_eq!(TabId::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(TabId::from_slug("payroll"), None);
    }
}
