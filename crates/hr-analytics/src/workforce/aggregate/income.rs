use super::views::{AgeSalaryPoint, PairMean, SalaryDistribution};
use crate::workforce::domain::Employee;
use std::collections::BTreeMap;

fn salaries_by<'a, F, G>(
    employees: &'a [Employee],
    outer: F,
    inner: G,
) -> BTreeMap<(&'a str, &'a str), Vec<f64>>
where
    F: Fn(&'a Employee) -> &'a str,
    G: Fn(&'a Employee) -> &'a str,
{
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for employee in employees {
        groups
            .entry((outer(employee), inner(employee)))
            .or_default()
            .push(employee.record.salary);
    }
    groups
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

pub(crate) fn mean_salary_by<'a, F, G>(
    employees: &'a [Employee],
    outer: F,
    inner: G,
) -> Vec<PairMean>
where
    F: Fn(&'a Employee) -> &'a str,
    G: Fn(&'a Employee) -> &'a str,
{
    salaries_by(employees, outer, inner)
        .into_iter()
        .map(|((outer, inner), salaries)| PairMean {
            outer: outer.to_string(),
            inner: inner.to_string(),
            mean: mean(&salaries),
            count: salaries.len(),
        })
        .collect()
}

pub(crate) fn salary_distributions(employees: &[Employee]) -> Vec<SalaryDistribution> {
    salaries_by(
        employees,
        |employee| employee.record.education_level.as_str(),
        |employee| employee.record.gender.as_str(),
    )
    .into_iter()
    .map(|((education_level, gender), mut salaries)| {
        salaries.sort_by(|a, b| a.total_cmp(b));
        SalaryDistribution {
            education_level: education_level.to_string(),
            gender: gender.to_string(),
            count: salaries.len(),
            min: salaries[0],
            q1: quantile(&salaries, 0.25),
            median: quantile(&salaries, 0.5),
            q3: quantile(&salaries, 0.75),
            max: salaries[salaries.len() - 1],
            mean: mean(&salaries),
        }
    })
    .collect()
}

pub(crate) fn age_salary_points(employees: &[Employee]) -> Vec<AgeSalaryPoint> {
    employees
        .iter()
        .map(|employee| AgeSalaryPoint {
            employee_id: employee.record.employee_id.clone(),
            department: employee.record.department.clone(),
            age: employee.age,
            salary: employee.record.salary,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_ranks() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&sorted, 0.0), 10.0);
        assert_eq!(quantile(&sorted, 0.5), 25.0);
        assert_eq!(quantile(&sorted, 0.25), 17.5);
        assert_eq!(quantile(&sorted, 1.0), 40.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }
}
