//! Calendar-date parsing and rendering for the exercise tracker.

use chrono::NaiveDate;

/// Wire format for dates in responses, e.g. `Mon May 15 2023`.
const HUMAN_DATE_FORMAT: &str = "%a %b %d %Y";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Renders a date in the human-readable response format.
pub fn format_human(date: NaiveDate) -> String {
    date.format(HUMAN_DATE_FORMAT).to_string()
}
