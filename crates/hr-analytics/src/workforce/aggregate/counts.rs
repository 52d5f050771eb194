use super::bands::AgeBand;
use super::views::{AgeBandCount, CategoryCount, HeadcountSummary, PairCount, YearCount};
use crate::workforce::domain::Employee;
use std::collections::{BTreeMap, HashMap};

pub(crate) fn headcount(employees: &[Employee]) -> HeadcountSummary {
    let active = employees.iter().filter(|employee| employee.is_active()).count();

    HeadcountSummary {
        total_hired: employees.len(),
        active,
        terminated: employees.len() - active,
    }
}

/// Counts per calendar year, skipping employees for which `year_of` is `None`.
pub(crate) fn per_year<F>(employees: &[Employee], year_of: F) -> Vec<YearCount>
where
    F: Fn(&Employee) -> Option<i32>,
{
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in employees.iter().filter_map(year_of) {
        *counts.entry(year).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Counts per label, largest first; equal counts are ordered by label.
pub(crate) fn category_counts<'a, F>(employees: &'a [Employee], key: F) -> Vec<CategoryCount>
where
    F: Fn(&'a Employee) -> &'a str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for employee in employees {
        *counts.entry(key(employee)).or_default() += 1;
    }

    let mut entries: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

pub(crate) fn pair_counts<'a, F, G>(employees: &'a [Employee], outer: F, inner: G) -> Vec<PairCount>
where
    F: Fn(&'a Employee) -> &'a str,
    G: Fn(&'a Employee) -> &'a str,
{
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for employee in employees {
        *counts
            .entry((outer(employee), inner(employee)))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((outer, inner), count)| PairCount {
            outer: outer.to_string(),
            inner: inner.to_string(),
            count,
        })
        .collect()
}

pub(crate) fn age_band_counts(employees: &[Employee]) -> Vec<AgeBandCount> {
    let mut counts: BTreeMap<AgeBand, usize> = BTreeMap::new();
    for employee in employees {
        *counts.entry(AgeBand::for_age(employee.age)).or_default() += 1;
    }

    AgeBand::ordered()
        .into_iter()
        .filter_map(|band| {
            counts.get(&band).map(|count| AgeBandCount {
                band,
                label: band.label(),
                count: *count,
            })
        })
        .collect()
}
