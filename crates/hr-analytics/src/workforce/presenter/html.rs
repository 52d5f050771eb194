use super::table::{EmployeeColumn, EmployeePage, EmployeeQuery, SortDirection};
use super::{ChartSpec, Dashboard, KpiCard, TabId, TableSpec, Widget, WidgetWidth};
use std::fmt::Write as _;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// The employee table state shown on the records tab.
#[derive(Debug, Clone, Copy)]
pub struct RecordsView<'a> {
    pub query: &'a EmployeeQuery,
    pub page: &'a EmployeePage,
}

/// Renders the full HTML document with `active` selected. `records` is only
/// consulted when the records tab is active.
pub fn render_dashboard_page(
    dashboard: &Dashboard,
    active: TabId,
    records: Option<RecordsView<'_>>,
) -> String {
    let mut html = String::new();
    let title = escape_html(dashboard.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{title}</title>").expect("write title");
    writeln!(html, "<link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\">").expect("write css");
    writeln!(html, "<script src=\"{PLOTLY_JS}\"></script>").expect("write plotly");
    html.push_str("</head>\n<body>\n<div class=\"container-fluid\">\n");
    writeln!(html, "<h1 class=\"mb-4\">{title}</h1>").expect("write heading");

    render_tab_nav(&mut html, dashboard, active);

    let mut scripts = Vec::new();
    html.push_str("<div class=\"container\">\n");
    if let Some(tab) = dashboard.tab(active) {
        html.push_str("<div class=\"row\">\n");
        for widget in &tab.widgets {
            match widget {
                Widget::KpiCards { cards } => render_kpi_cards(&mut html, cards),
                Widget::Chart(chart) => {
                    render_chart_slot(&mut html, chart);
                    scripts.push(chart_script(chart));
                }
                Widget::Table(spec) => match records {
                    Some(view) => render_table(&mut html, spec, view),
                    None => html.push_str("<p>No employee records requested.</p>\n"),
                },
            }
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");

    if !scripts.is_empty() {
        html.push_str("<script>\n");
        for script in scripts {
            html.push_str(&script);
        }
        html.push_str("</script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_tab_nav(html: &mut String, dashboard: &Dashboard, active: TabId) {
    html.push_str("<ul class=\"nav nav-tabs mb-3\">\n");
    for tab in &dashboard.tabs {
        let class = if tab.id == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        writeln!(
            html,
            "<li class=\"nav-item\"><a class=\"{}\" href=\"/?tab={}\">{}</a></li>",
            class,
            tab.id.slug(),
            escape_html(tab.label)
        )
        .expect("write tab link");
    }
    html.push_str("</ul>\n");
}

fn render_kpi_cards(html: &mut String, cards: &[KpiCard]) {
    for card in cards {
        writeln!(
            html,
            "<div class=\"col-md-4\"><div class=\"card\"><div class=\"card-body\"><h4 class=\"card-title\">{}</h4><p>{}</p></div></div></div>",
            card.value,
            escape_html(card.label)
        )
        .expect("write kpi card");
    }
    html.push_str("<hr class=\"my-3\">\n");
}

fn render_chart_slot(html: &mut String, chart: &ChartSpec) {
    let column = match chart.width {
        WidgetWidth::Full => "col-12",
        WidgetWidth::Half => "col-md-6",
    };
    writeln!(
        html,
        "<div class=\"{}\"><div id=\"{}\" class=\"chart\" aria-label=\"{}\"></div></div>",
        column,
        chart.id,
        escape_html(chart.title)
    )
    .expect("write chart slot");
}

fn chart_script(chart: &ChartSpec) -> String {
    let figure = serde_json::to_string(&chart.figure).unwrap_or_else(|_| "null".to_string());
    // `<` only appears inside JSON strings, where the escape is equivalent.
    let figure = figure.replace('<', "\\u003c");
    format!(
        "(function(){{var f={figure};Plotly.newPlot(\"{}\",f.data,f.layout,{{responsive:true}});}})();\n",
        chart.id
    )
}

fn render_table(html: &mut String, spec: &TableSpec, view: RecordsView<'_>) {
    let RecordsView { query, page } = view;
    let columns = EmployeeColumn::ordered();

    html.push_str("<div class=\"col-12\">\n");
    writeln!(
        html,
        "<form method=\"get\" action=\"/\" id=\"{}-filters\"><input type=\"hidden\" name=\"tab\" value=\"{}\">",
        spec.id,
        TabId::EmployeeRecords.slug()
    )
    .expect("write filter form");
    if let Some(sort) = query.sort {
        writeln!(
            html,
            "<input type=\"hidden\" name=\"sort\" value=\"{}\"><input type=\"hidden\" name=\"dir\" value=\"{}\">",
            sort.column.key(),
            sort.direction.key()
        )
        .expect("write sort state");
    }

    writeln!(
        html,
        "<table id=\"{}\" class=\"table table-sm table-striped\">\n<thead>\n<tr>",
        spec.id
    )
    .expect("write table open");
    for column in columns {
        let direction = match query.sort {
            Some(sort) if sort.column == column => sort.direction.reversed(),
            _ => SortDirection::Ascending,
        };
        let marker = match query.sort {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            },
            _ => "",
        };
        let link = records_link(&query.clone().sorted_by(column, direction).on_page(1));
        writeln!(
            html,
            "<th><a href=\"{}\">{}</a>{}</th>",
            escape_html(&link),
            escape_html(column.label()),
            marker
        )
        .expect("write header cell");
    }
    html.push_str("</tr>\n<tr>");
    for column in columns {
        let placeholder = if column.is_numeric() {
            "e.g. >= 50000"
        } else {
            "filter data..."
        };
        writeln!(
            html,
            "<th><input class=\"form-control form-control-sm\" name=\"filter_{}\" value=\"{}\" placeholder=\"{}\"></th>",
            column.key(),
            escape_html(query.filter_value(column).unwrap_or_default()),
            placeholder
        )
        .expect("write filter cell");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &page.rows {
        html.push_str("<tr>");
        for column in columns {
            write!(html, "<td>{}</td>", escape_html(&row.cell(column))).expect("write cell");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html.push_str("<button type=\"submit\" class=\"btn btn-sm btn-secondary\">Apply filters</button>\n</form>\n");

    render_pagination(html, query, page);
    html.push_str("</div>\n");
}

fn render_pagination(html: &mut String, query: &EmployeeQuery, page: &EmployeePage) {
    html.push_str("<nav class=\"mt-2\">");
    if page.page > 1 {
        let link = records_link(&query.clone().on_page(page.page - 1));
        write!(html, "<a href=\"{}\">&laquo; Previous</a> ", escape_html(&link))
            .expect("write previous link");
    }
    write!(
        html,
        "<span>Page {} of {} ({} matching employees)</span>",
        page.page, page.page_count, page.total_matches
    )
    .expect("write page summary");
    if page.page < page.page_count {
        let link = records_link(&query.clone().on_page(page.page + 1));
        write!(html, " <a href=\"{}\">Next &raquo;</a>", escape_html(&link))
            .expect("write next link");
    }
    html.push_str("</nav>\n");
}

fn records_link(query: &EmployeeQuery) -> String {
    let mut link = format!("/?tab={}", TabId::EmployeeRecords.slug());
    for (name, value) in query.to_params() {
        write!(
            link,
            "&{}={}",
            urlencoding::encode(&name),
            urlencoding::encode(&value)
        )
        .expect("write query parameter");
    }
    link
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
