//! Success-rate bucketing.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::period::{next_period, period_start, period_window, total_periods};
use crate::model::{Frequency, HabitRecord};

/// Successful and total periods for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodTally {
    pub successful: i64,
    pub total: i64,
}

impl PeriodTally {
    /// Success rate in percent, always within `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total <= 0 {
            return 0.0;
        }
        (self.successful as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Count the periods of `[start, end]` that hold at least one completed record.
///
/// Weekly ranges are widened to whole Monday–Sunday weeks before counting.
/// A reversed range has no periods.
#[must_use]
pub fn tally(
    records: &[HabitRecord],
    frequency: Frequency,
    start: NaiveDate,
    end: NaiveDate,
) -> PeriodTally {
    if end < start {
        return PeriodTally {
            successful: 0,
            total: 0,
        };
    }

    let (from, to) = period_window(start, end, frequency);
    let buckets: BTreeSet<NaiveDate> = records
        .iter()
        .filter(|r| r.completed && r.date >= from && r.date <= to)
        .map(|r| period_start(r.date, frequency))
        .collect();

    PeriodTally {
        successful: buckets.len() as i64,
        total: total_periods(start, end, frequency),
    }
}

/// State of one period in a history strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodState {
    /// At least one completed record.
    Done,
    /// Records exist, none completed.
    Missed,
    /// No record at all.
    Untracked,
}

/// One period of a habit's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodStatus {
    pub start: NaiveDate,
    pub state: PeriodState,
}

/// Per-period states for every period of `[start, end]`, oldest first.
#[must_use]
pub fn history(
    records: &[HabitRecord],
    frequency: Frequency,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PeriodStatus> {
    if end < start {
        return Vec::new();
    }

    let (from, to) = period_window(start, end, frequency);
    let mut states: BTreeMap<NaiveDate, PeriodState> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date >= from && r.date <= to) {
        let entry = states
            .entry(period_start(record.date, frequency))
            .or_insert(PeriodState::Missed);
        if record.completed {
            *entry = PeriodState::Done;
        }
    }

    let mut periods = Vec::new();
    let mut cursor = Some(period_start(start, frequency));
    while let Some(current) = cursor.filter(|c| *c <= to) {
        periods.push(PeriodStatus {
            start: current,
            state: states
                .get(&current)
                .copied()
                .unwrap_or(PeriodState::Untracked),
        });
        cursor = next_period(current, frequency);
    }
    periods
}
