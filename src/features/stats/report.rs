//! Progress reports.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Frequency;

/// Adherence summary of one habit over a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub title: String,
    pub frequency: Frequency,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Periods in range with at least one completion.
    pub successful_periods: i64,
    /// Periods in range; zero when `end` precedes `start`.
    pub total_periods: i64,
    /// Percentage rounded to two decimals.
    pub success_rate: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl ProgressReport {
    /// Plain-text rendering, one fact per line.
    #[must_use]
    pub fn render(&self) -> String {
        let unit = self.frequency.period_name();
        [
            format!("Progress Report for Habit: {}", self.title),
            format!("Period: {} to {}", self.start, self.end),
            format!("Total {unit}s: {}", self.total_periods),
            format!("Successful {unit}s: {}", self.successful_periods),
            format!("Success rate: {:.2}%", self.success_rate),
            format!("Current streak: {} {unit}s", self.current_streak),
            format!("Longest streak: {} {unit}s", self.longest_streak),
        ]
        .join("\n")
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
