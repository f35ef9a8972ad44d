//! Output formatting for habitrack.
//!
//! This module provides formatters for displaying habits, records and
//! statistics as colored text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::HabitError;
use crate::features::stats::{PeriodStatus, ProgressReport};
use crate::model::{Habit, HabitRecord};

pub use json::*;
pub use pretty::*;

/// Format an owner's habits based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_habits(habits: &[Habit], owner: &str, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, owner)),
        OutputFormat::Json => format_habits_json(habits, owner),
    }
}

/// Format a single habit based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_habit(habit: &Habit, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_pretty(habit)),
        OutputFormat::Json => to_json(habit),
    }
}

/// Format a habit's records based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_records(
    habit: &Habit,
    records: &[HabitRecord],
    format: OutputFormat,
) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_records_pretty(habit, records)),
        OutputFormat::Json => format_records_json(habit, records),
    }
}

/// Format a progress report based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_report(report: &ProgressReport, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format all of an owner's reports based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_summary(
    reports: &[ProgressReport],
    owner: &str,
    format: OutputFormat,
) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(reports, owner)),
        OutputFormat::Json => format_summary_json(reports, owner),
    }
}

/// Format a history strip based on output format
///
/// # Errors
///
/// Returns `HabitError::Parse` if JSON serialization fails.
pub fn format_history(
    habit: &Habit,
    periods: &[PeriodStatus],
    format: OutputFormat,
) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(habit, periods)),
        OutputFormat::Json => format_history_json(habit, periods),
    }
}
