use chrono::{NaiveDate, NaiveDateTime};

// Day-first layouts are tried before ISO so `03/04/2020` is the 3rd of April.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];
const TIME_SUFFIXES: [&str; 2] = [" %H:%M:%S", " %H:%M"];

pub(crate) fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in DATE_FORMATS {
        for suffix in TIME_SUFFIXES {
            let layout = format!("{format}{suffix}");
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, &layout) {
                return Some(datetime.date());
            }
        }
    }

    None
}

pub(crate) fn parse_salary(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn day_first_layouts_put_the_day_before_the_month() {
        assert_eq!(parse_day_first("03/04/2020"), Some(date(2020, 4, 3)));
        assert_eq!(parse_day_first("15-03-2020"), Some(date(2020, 3, 15)));
        assert_eq!(parse_day_first("15.03.2020"), Some(date(2020, 3, 15)));
    }

    #[test]
    fn iso_dates_and_timestamps_are_accepted() {
        assert_eq!(parse_day_first("2020-03-15"), Some(date(2020, 3, 15)));
        assert_eq!(parse_day_first("15/03/2020 08:30"), Some(date(2020, 3, 15)));
        assert_eq!(
            parse_day_first("2020-03-15 08:30:12"),
            Some(date(2020, 3, 15))
        );
    }

    #[test]
    fn blank_and_garbage_values_are_rejected() {
        assert_eq!(parse_day_first(""), None);
        assert_eq!(parse_day_first("   "), None);
        assert_eq!(parse_day_first("not a date"), None);
        assert_eq!(parse_day_first("31/02/2020"), None);
        assert_eq!(parse_day_first("15/13/2020"), None);
    }

    #[test]
    fn salary_tolerates_currency_formatting() {
        assert_eq!(parse_salary("65000"), Some(65000.0));
        assert_eq!(parse_salary("$72,500.50"), Some(72500.5));
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("n/a"), None);
        assert_eq!(parse_salary("inf"), None);
    }
}
