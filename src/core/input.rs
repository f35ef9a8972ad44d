//! Boundary parsing for user-supplied dates, frequencies and flags.
//!
//! Everything typed on the command line passes through here before it
//! reaches the tracker or the statistics engine. Malformed input is the
//! only thing that produces [`HabitError::Validation`].

use chrono::{Days, NaiveDate};

use crate::error::HabitError;
use crate::model::Frequency;

/// ISO calendar date format accepted everywhere.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, plus `today` and `yesterday` relative to `today`.
///
/// # Errors
///
/// Returns `HabitError::Validation` for anything else.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, HabitError> {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => {
            return today.checked_sub_days(Days::new(1)).ok_or_else(|| {
                HabitError::validation(format!("no day before {today}"))
            })
        }
        _ => {}
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        HabitError::validation(format!(
            "invalid date `{trimmed}`; expected YYYY-MM-DD, today or yesterday"
        ))
    })
}

/// Parse a frequency token (`DAILY` / `WEEKLY`, case-insensitive).
///
/// # Errors
///
/// Returns `HabitError::Validation` for unknown tokens.
pub fn parse_frequency(input: &str) -> Result<Frequency, HabitError> {
    input.parse()
}

/// Parse a completion flag.
///
/// # Errors
///
/// Returns `HabitError::Validation` when the value is not a recognised boolean.
pub fn parse_completed(input: &str) -> Result<bool, HabitError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "done" => Ok(true),
        "false" | "no" | "n" | "0" | "missed" => Ok(false),
        other => Err(HabitError::validation(format!(
            "invalid completion flag `{other}`; expected true or false"
        ))),
    }
}
