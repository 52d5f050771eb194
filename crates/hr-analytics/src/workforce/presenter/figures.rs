use super::Figure;
use crate::workforce::aggregate::{
    AgeSalaryPoint, CategoryCount, PairCount, SalaryDistribution, YearCount,
};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

fn layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "margin": { "t": 60, "l": 50, "r": 20, "b": 50 },
    })
}

fn axis_layout(title: &str, x_title: &str, y_title: &str) -> Value {
    let mut value = layout(title);
    value["xaxis"] = json!({ "title": { "text": x_title } });
    value["yaxis"] = json!({ "title": { "text": y_title } });
    value
}

pub(crate) fn yearly_bar(counts: &[YearCount], title: &str, y_title: &str) -> Figure {
    let years: Vec<i32> = counts.iter().map(|entry| entry.year).collect();
    let values: Vec<usize> = counts.iter().map(|entry| entry.count).collect();

    Figure {
        data: vec![json!({ "type": "bar", "x": years, "y": values })],
        layout: axis_layout(title, "Year", y_title),
    }
}

pub(crate) fn labelled_bar(
    labels: Vec<&str>,
    values: Vec<usize>,
    title: &str,
    x_title: &str,
) -> Figure {
    Figure {
        data: vec![json!({ "type": "bar", "x": labels, "y": values })],
        layout: axis_layout(title, x_title, "Employees"),
    }
}

pub(crate) fn category_bar(counts: &[CategoryCount], title: &str, x_title: &str) -> Figure {
    labelled_bar(
        counts.iter().map(|entry| entry.label.as_str()).collect(),
        counts.iter().map(|entry| entry.count).collect(),
        title,
        x_title,
    )
}

pub(crate) fn category_pie(counts: &[CategoryCount], title: &str) -> Figure {
    let labels: Vec<&str> = counts.iter().map(|entry| entry.label.as_str()).collect();
    let values: Vec<usize> = counts.iter().map(|entry| entry.count).collect();

    Figure {
        data: vec![json!({ "type": "pie", "labels": labels, "values": values })],
        layout: layout(title),
    }
}

// Unit separator; never present in exported CSV text.
const ID_SEPARATOR: char = '\u{1f}';

/// Two-level sunburst; parent totals are the sum of their children.
pub(crate) fn pair_sunburst(pairs: &[PairCount], title: &str) -> Figure {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for pair in pairs {
        *totals.entry(pair.outer.as_str()).or_default() += pair.count;
    }

    let mut ids = Vec::with_capacity(totals.len() + pairs.len());
    let mut labels = Vec::with_capacity(ids.capacity());
    let mut parents = Vec::with_capacity(ids.capacity());
    let mut values = Vec::with_capacity(ids.capacity());

    for (outer, total) in &totals {
        ids.push(outer.to_string());
        labels.push(outer.to_string());
        parents.push(String::new());
        values.push(*total);
    }
    for pair in pairs {
        ids.push(format!("{}{ID_SEPARATOR}{}", pair.outer, pair.inner));
        labels.push(pair.inner.clone());
        parents.push(pair.outer.clone());
        values.push(pair.count);
    }

    Figure {
        data: vec![json!({
            "type": "sunburst",
            "ids": ids,
            "labels": labels,
            "parents": parents,
            "values": values,
            "branchvalues": "total",
        })],
        layout: layout(title),
    }
}

/// One box trace per gender, drawn from precomputed quartiles.
pub(crate) fn salary_box(distributions: &[SalaryDistribution], title: &str) -> Figure {
    let genders: BTreeSet<&str> = distributions
        .iter()
        .map(|entry| entry.gender.as_str())
        .collect();

    let data = genders
        .into_iter()
        .map(|gender| {
            let groups: Vec<&SalaryDistribution> = distributions
                .iter()
                .filter(|entry| entry.gender == gender)
                .collect();
            json!({
                "type": "box",
                "name": gender,
                "x": groups.iter().map(|entry| entry.education_level.as_str()).collect::<Vec<_>>(),
                "lowerfence": groups.iter().map(|entry| entry.min).collect::<Vec<_>>(),
                "q1": groups.iter().map(|entry| entry.q1).collect::<Vec<_>>(),
                "median": groups.iter().map(|entry| entry.median).collect::<Vec<_>>(),
                "q3": groups.iter().map(|entry| entry.q3).collect::<Vec<_>>(),
                "upperfence": groups.iter().map(|entry| entry.max).collect::<Vec<_>>(),
                "mean": groups.iter().map(|entry| entry.mean).collect::<Vec<_>>(),
            })
        })
        .collect();

    let mut layout = axis_layout(title, "Education Level", "Salary");
    layout["boxmode"] = json!("group");
    Figure { data, layout }
}

/// One marker trace per department.
pub(crate) fn age_salary_scatter(points: &[AgeSalaryPoint], title: &str) -> Figure {
    let mut by_department: BTreeMap<&str, Vec<&AgeSalaryPoint>> = BTreeMap::new();
    for point in points {
        by_department
            .entry(point.department.as_str())
            .or_default()
            .push(point);
    }

    let data = by_department
        .into_iter()
        .map(|(department, points)| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": department,
                "x": points.iter().map(|point| point.age).collect::<Vec<_>>(),
                "y": points.iter().map(|point| point.salary).collect::<Vec<_>>(),
                "text": points.iter().map(|point| point.employee_id.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    Figure {
        data,
        layout: axis_layout(title, "Age", "Salary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(outer: &str, inner: &str, count: usize) -> PairCount {
        PairCount {
            outer: outer.to_string(),
            inner: inner.to_string(),
            count,
        }
    }

    #[test]
    fn sunburst_roots_carry_child_totals() {
        let figure = pair_sunburst(
            &[
                pair("New York", "Buffalo", 1),
                pair("New York", "New York City", 2),
                pair("Ohio", "Columbus", 4),
            ],
            "Distribution by City & State",
        );
        let trace = &figure.data[0];

        assert_eq!(
            trace["ids"],
            json!([
                "New York",
                "Ohio",
                "New York\u{1f}Buffalo",
                "New York\u{1f}New York City",
                "Ohio\u{1f}Columbus"
            ])
        );
        assert_eq!(trace["parents"], json!(["", "", "New York", "New York", "Ohio"]));
        assert_eq!(trace["values"], json!([3, 4, 1, 2, 4]));
        assert_eq!(figure.layout["title"]["text"], "Distribution by City & State");
    }

    #[test]
    fn sunburst_ids_stay_unique_when_labels_contain_slashes() {
        let figure = pair_sunburst(
            &[pair("A", "B", 1), pair("A/B", "C", 2)],
            "Education vs Performance",
        );
        let ids: Vec<&str> = figure.data[0]["ids"]
            .as_array()
            .expect("ids")
            .iter()
            .filter_map(|id| id.as_str())
            .collect();

        let unique: BTreeSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(unique.len(), 4);
        assert_eq!(figure.data[0]["parents"], json!(["", "", "A", "A/B"]));
    }

    #[test]
    fn box_plot_has_one_trace_per_gender() {
        let distribution = |education: &str, gender: &str| SalaryDistribution {
            education_level: education.to_string(),
            gender: gender.to_string(),
            count: 1,
            min: 1.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
            max: 5.0,
            mean: 3.0,
        };
        let figure = salary_box(
            &[
                distribution("Bachelor", "Female"),
                distribution("Master", "Female"),
                distribution("Bachelor", "Male"),
            ],
            "Salary by Education & Gender",
        );

        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0]["name"], "Female");
        assert_eq!(figure.data[0]["x"], json!(["Bachelor", "Master"]));
        assert_eq!(figure.layout["boxmode"], "group");
    }

    #[test]
    fn empty_inputs_build_empty_traces() {
        let figure = yearly_bar(&[], "Hires per Year", "Hires");
        assert_eq!(figure.data[0]["x"], json!([]));
        assert!(salary_box(&[], "Salary").data.is_empty());
        assert!(age_salary_scatter(&[], "Age vs Salary").data.is_empty());
    }
}
