//! Calendar date helpers shared by the goal store and the pacing engine.

use chrono::{Local, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored; anything
/// else (empty input, time components, invalid days) yields `None`.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).ok()
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
