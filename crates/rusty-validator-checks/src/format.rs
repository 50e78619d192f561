//! Structured text validation functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Validates well-formed JSON text.
///
/// Any JSON value is accepted at the top level, including bare scalars such
/// as `42` or `"text"`.
pub fn is_well_formed_json(s: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(s).is_ok()
}

/// Validates that `s` is a date, time or date-time written in `format`.
///
/// `format` uses `chrono` strftime syntax. Formats with an offset (`%z`)
/// are tried first, then naive date-times, dates and times. An unusable
/// format string simply fails to match.
pub fn matches_date_format(s: &str, format: &str) -> bool {
    DateTime::parse_from_str(s, format).is_ok()
        || NaiveDateTime::parse_from_str(s, format).is_ok()
        || NaiveDate::parse_from_str(s, format).is_ok()
        || NaiveTime::parse_from_str(s, format).is_ok()
}
