//! Parsers for the textual encodings accepted at the presentation boundary.

use super::ParseTaskFieldError;
use chrono::{NaiveDate, NaiveTime};

/// Parses a due date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`ParseTaskFieldError`] when the text is not a calendar date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, ParseTaskFieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ParseTaskFieldError::new("due date", value))
}

/// Parses a due time in 24-hour `HH:MM` form.
///
/// # Errors
///
/// Returns [`ParseTaskFieldError`] when the text is not a time of day.
pub fn parse_due_time(value: &str) -> Result<NaiveTime, ParseTaskFieldError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ParseTaskFieldError::new("due time", value))
}

/// Splits a comma-separated tag list, trimming entries and dropping blanks.
#[must_use]
pub fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses a recurrence day selector.
///
/// Range checks depend on the pattern and happen during task validation.
///
/// # Errors
///
/// Returns [`ParseTaskFieldError`] when the text is not a small unsigned
/// integer.
pub fn parse_recurrence_day(value: &str) -> Result<u8, ParseTaskFieldError> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|_| ParseTaskFieldError::new("recurrence day", value))
}
