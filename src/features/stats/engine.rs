//! Statistics engine.
//!
//! Read-only view over the habit and record stores. Every call loads the
//! habit's full record set and recomputes from scratch; nothing is cached.
//! A habit that does not resolve yields zero or `None`, never an error.

use chrono::{Local, NaiveDate};
use log::debug;

use super::rate::{self, PeriodStatus};
use super::report::{round2, ProgressReport};
use super::streak;
use crate::error::HabitError;
use crate::model::{Habit, HabitRecord};
use crate::storage::{HabitStore, RecordStore};

/// Computes streaks, success rates and reports on demand.
pub struct StatisticsEngine<'a> {
    habits: &'a dyn HabitStore,
    records: &'a dyn RecordStore,
    as_of: NaiveDate,
}

impl<'a> StatisticsEngine<'a> {
    /// Create an engine evaluating as of the local calendar date.
    #[must_use]
    pub fn new(habits: &'a dyn HabitStore, records: &'a dyn RecordStore) -> Self {
        Self {
            habits,
            records,
            as_of: Local::now().date_naive(),
        }
    }

    /// Evaluate as of `date` instead of today.
    #[must_use]
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = date;
        self
    }

    /// The evaluation date.
    #[must_use]
    pub const fn evaluation_date(&self) -> NaiveDate {
        self.as_of
    }

    fn load(&self, owner: &str, title: &str) -> Result<Option<(Habit, Vec<HabitRecord>)>, HabitError> {
        let Some(habit) = self.habits.find_by_owner_and_title(owner, title)? else {
            debug!("event=stats_load module=stats status=not_found owner={owner}");
            return Ok(None);
        };
        let records = self.records.list_by_habit(habit.id)?;
        Ok(Some((habit, records)))
    }

    /// Consecutive completed periods ending at the current one.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn current_streak(&self, owner: &str, title: &str) -> Result<u32, HabitError> {
        Ok(self.load(owner, title)?.map_or(0, |(habit, records)| {
            streak::current_streak(&records, habit.frequency, self.as_of)
        }))
    }

    /// Longest run of consecutive completed periods in the habit's history.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn longest_streak(&self, owner: &str, title: &str) -> Result<u32, HabitError> {
        Ok(self.load(owner, title)?.map_or(0, |(habit, records)| {
            streak::longest_streak(&records, habit.frequency, self.as_of)
        }))
    }

    /// Percentage of periods in `[start, end]` with a completed record.
    ///
    /// Returns `0.0` for a missing habit or a reversed range.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn success_percentage(
        &self,
        owner: &str,
        title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, HabitError> {
        Ok(self.load(owner, title)?.map_or(0.0, |(habit, records)| {
            rate::tally(&records, habit.frequency, start, end).percentage()
        }))
    }

    /// Full progress report, or `None` when the habit does not resolve.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn progress_report(
        &self,
        owner: &str,
        title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<ProgressReport>, HabitError> {
        Ok(self
            .load(owner, title)?
            .map(|(habit, records)| self.build_report(&habit, &records, start, end)))
    }

    /// One report per habit of `owner`, ordered by title.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn summary(
        &self,
        owner: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ProgressReport>, HabitError> {
        let habits = self.habits.list_by_owner(owner)?;
        let mut reports = Vec::with_capacity(habits.len());
        for habit in &habits {
            let records = self.records.list_by_habit(habit.id)?;
            reports.push(self.build_report(habit, &records, start, end));
        }
        Ok(reports)
    }

    /// Per-period completion states over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn history(
        &self,
        owner: &str,
        title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<Vec<PeriodStatus>>, HabitError> {
        Ok(self
            .load(owner, title)?
            .map(|(habit, records)| rate::history(&records, habit.frequency, start, end)))
    }

    fn build_report(
        &self,
        habit: &Habit,
        records: &[HabitRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProgressReport {
        let tally = rate::tally(records, habit.frequency, start, end);
        let report = ProgressReport {
            title: habit.title.clone(),
            frequency: habit.frequency,
            start,
            end,
            successful_periods: tally.successful,
            total_periods: tally.total.max(0),
            success_rate: round2(tally.percentage()),
            current_streak: streak::current_streak(records, habit.frequency, self.as_of),
            longest_streak: streak::longest_streak(records, habit.frequency, self.as_of),
        };
        debug!(
            "event=stats_report module=stats status=ok habit_id={} records={} total={} successful={}",
            habit.id,
            records.len(),
            report.total_periods,
            report.successful_periods
        );
        report
    }
}
