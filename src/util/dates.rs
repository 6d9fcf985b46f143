//! Free-form display dates ("Jul 2024", "2024-07-01") to comparable instants.
//!
//! Partial dates resolve to the first day of their period. Anything that
//! does not parse yields `None`, which orders before every parsed value.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Month-and-year layouts; a day is appended before parsing.
const MONTH_FORMATS: &[&str] = &["%b %Y", "%B %Y", "%Y-%m", "%m/%Y"];

/// Full-date layouts, tried in order after the month-year ones.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Earliest year accepted from a layout match. chrono lets a format space
/// match zero characters, so "Jul 2024" also fits `%b %d %Y` as 0024-07-20.
const MIN_YEAR: i32 = 1000;

/// Milliseconds since the Unix epoch (UTC) for a display date.
pub fn parse_issued_millis(raw: &str) -> Option<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    parse_naive_date(value).map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

fn parse_naive_date(value: &str) -> Option<NaiveDate> {
    // chrono needs a day to build a date, so pin partial values to the 1st.
    let month_year = MONTH_FORMATS
        .iter()
        .flat_map(|fmt| NaiveDate::parse_from_str(&format!("{value} 01"), &format!("{fmt} %d")));
    let full = DATE_FORMATS
        .iter()
        .flat_map(|fmt| NaiveDate::parse_from_str(value, fmt));
    if let Some(date) = month_year.chain(full).find(|d| d.year() >= MIN_YEAR) {
        return Some(date);
    }

    if value.len() == 4 {
        if let Ok(year) = value.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}
