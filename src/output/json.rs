//! JSON output formatting for habitrack.

use serde::Serialize;
use serde_json::json;

use crate::error::HabitError;
use crate::features::stats::{PeriodStatus, ProgressReport};
use crate::model::{Habit, HabitRecord};

/// Format an owner's habits as JSON
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit], owner: &str) -> Result<String, HabitError> {
    let output = json!({
        "owner": owner,
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a habit's records as JSON
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_records_json(habit: &Habit, records: &[HabitRecord]) -> Result<String, HabitError> {
    let output = json!({
        "habit": habit.title,
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an owner's progress reports as JSON
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_summary_json(reports: &[ProgressReport], owner: &str) -> Result<String, HabitError> {
    let output = json!({
        "owner": owner,
        "count": reports.len(),
        "items": reports
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a history strip as JSON
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_history_json(habit: &Habit, periods: &[PeriodStatus]) -> Result<String, HabitError> {
    let output = json!({
        "habit": habit.title,
        "frequency": habit.frequency,
        "periods": periods
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stats::PeriodState;
    use crate::model::Frequency;
    use chrono::NaiveDate;

    fn make_habit(title: &str) -> Habit {
        Habit {
            id: 7,
            owner: "ana".to_string(),
            title: title.to_string(),
            description: String::new(),
            frequency: Frequency::Daily,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_habits_json_empty() {
        let result = format_habits_json(&[], "ana").unwrap();

        assert!(result.contains("\"owner\": \"ana\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_habits_json_uses_uppercase_frequency() {
        let result = format_habits_json(&[make_habit("Read")], "ana").unwrap();

        assert!(result.contains("\"title\": \"Read\""));
        assert!(result.contains("\"frequency\": \"DAILY\""));
        assert!(result.contains("\"id\": 7"));
    }

    #[test]
    fn test_format_records_json() {
        let habit = make_habit("Read");
        let records = [HabitRecord::new(7, date(2024, 10, 19), true)];
        let result = format_records_json(&habit, &records).unwrap();

        assert!(result.contains("\"habit\": \"Read\""));
        assert!(result.contains("\"date\": \"2024-10-19\""));
        assert!(result.contains("\"completed\": true"));
    }

    #[test]
    fn test_format_history_json() {
        let habit = make_habit("Read");
        let periods = [PeriodStatus {
            start: date(2024, 10, 19),
            state: PeriodState::Missed,
        }];
        let result = format_history_json(&habit, &periods).unwrap();

        assert!(result.contains("\"start\": \"2024-10-19\""));
        assert!(result.contains("\"state\": \"missed\""));
    }

    #[test]
    fn test_to_json_generic() {
        let data = json!({"key": "value", "number": 42});
        let result = to_json(&data).unwrap();

        assert!(result.contains("\"key\": \"value\""));
        assert!(result.contains("\"number\": 42"));
    }
}
