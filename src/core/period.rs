//! Calendar period bucketing.
//!
//! A daily habit is measured in calendar days; a weekly habit in
//! Monday–Sunday weeks. Every period is identified by its first day, so two
//! dates fall in the same period exactly when their period starts are equal.
//!
//! Nothing here panics at the edges of the calendar: week bounds saturate at
//! `NaiveDate::MIN`/`MAX` and stepping past them yields `None`.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::Frequency;

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

/// Sunday of the week containing `date`.
#[must_use]
pub fn week_end(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(6 - date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the period containing `date`.
#[must_use]
pub fn period_start(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date,
        Frequency::Weekly => week_start(date),
    }
}

/// Start of the period immediately before the one starting at `start`.
///
/// `None` when that period would begin before `NaiveDate::MIN`.
#[must_use]
pub fn previous_period(start: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => start.checked_sub_days(Days::new(1)),
        Frequency::Weekly => week_start(start).checked_sub_days(Days::new(7)),
    }
}

/// Start of the period immediately after the one starting at `start`.
///
/// `None` when that period would begin after `NaiveDate::MAX`.
#[must_use]
pub fn next_period(start: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => start.checked_add_days(Days::new(1)),
        Frequency::Weekly => week_start(start).checked_add_days(Days::new(7)),
    }
}

/// Signed number of days from `start` to `end`.
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Signed number of week boundaries between the weeks of `start` and `end`.
///
/// Two dates in the same Monday–Sunday week are zero weeks apart, so
/// `weeks_between + 1` is the number of calendar weeks the range touches.
#[must_use]
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (week_start(end) - week_start(start)).num_days() / 7
}

/// Inclusive date window covered by `[start, end]` once expanded to whole periods.
#[must_use]
pub fn period_window(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
) -> (NaiveDate, NaiveDate) {
    match frequency {
        Frequency::Daily => (start, end),
        Frequency::Weekly => (week_start(start), week_end(end)),
    }
}

/// Number of periods in `[start, end]`; zero or negative when `end < start`.
#[must_use]
pub fn total_periods(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> i64 {
    match frequency {
        Frequency::Daily => days_between(start, end) + 1,
        Frequency::Weekly => weeks_between(start, end) + 1,
    }
}
