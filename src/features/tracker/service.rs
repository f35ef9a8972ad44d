//! Habit lifecycle and completion tracking.
//!
//! The tracker is the only writer of habits and records. It enforces the
//! one-record-per-(habit, date) rule by routing every completion through
//! [`RecordStore::upsert`], and it removes a habit's records before the
//! habit itself so no record outlives its habit.

use chrono::NaiveDate;
use log::{debug, info};

use crate::error::HabitError;
use crate::model::{Frequency, Habit, HabitRecord, NewHabit};
use crate::storage::{HabitStore, RecordStore};

/// Use-case entry point for creating, editing and tracking habits.
pub struct HabitTracker<'a> {
    habits: &'a dyn HabitStore,
    records: &'a dyn RecordStore,
}

impl<'a> HabitTracker<'a> {
    #[must_use]
    pub fn new(habits: &'a dyn HabitStore, records: &'a dyn RecordStore) -> Self {
        Self { habits, records }
    }

    /// Create a habit for `owner`.
    ///
    /// # Errors
    ///
    /// - `HabitError::Validation` if the title is blank.
    /// - `HabitError::Duplicate` if the owner already has a habit with this
    ///   title, compared case-insensitively.
    pub fn create_habit(
        &self,
        owner: &str,
        title: &str,
        description: &str,
        frequency: Frequency,
    ) -> Result<Habit, HabitError> {
        let title = normalize_title(title)?;

        if self.habits.find_by_owner_and_title(owner, &title)?.is_some() {
            debug!("event=habit_create module=tracker status=duplicate owner={owner}");
            return Err(HabitError::Duplicate(title));
        }

        let habit = self.habits.save(&NewHabit {
            owner: owner.to_string(),
            title,
            description: description.trim().to_string(),
            frequency,
        })?;

        info!(
            "event=habit_create module=tracker status=ok owner={owner} habit_id={} frequency={}",
            habit.id,
            habit.frequency.as_str()
        );
        Ok(habit)
    }

    /// Edit a habit in place, keeping its records.
    ///
    /// Returns `Ok(false)` without touching anything when `old_title` does not
    /// resolve for `owner`.
    ///
    /// # Errors
    ///
    /// - `HabitError::Validation` if the new title is blank.
    /// - `HabitError::Duplicate` if the new title belongs to another habit
    ///   of the same owner.
    pub fn edit_habit(
        &self,
        owner: &str,
        old_title: &str,
        new_title: &str,
        new_description: &str,
        new_frequency: Frequency,
    ) -> Result<bool, HabitError> {
        let Some(mut habit) = self.habits.find_by_owner_and_title(owner, old_title)? else {
            debug!("event=habit_edit module=tracker status=not_found owner={owner}");
            return Ok(false);
        };

        let new_title = normalize_title(new_title)?;
        if !habit.has_title(&new_title) {
            if let Some(other) = self.habits.find_by_owner_and_title(owner, &new_title)? {
                if other.id != habit.id {
                    return Err(HabitError::Duplicate(new_title));
                }
            }
        }

        habit.title = new_title;
        habit.description = new_description.trim().to_string();
        habit.frequency = new_frequency;

        let updated = self.habits.update(&habit)?;
        info!(
            "event=habit_edit module=tracker status={} habit_id={} frequency={}",
            if updated { "ok" } else { "missing" },
            habit.id,
            habit.frequency.as_str()
        );
        Ok(updated)
    }

    /// Delete a habit and every record it owns.
    ///
    /// Returns `Ok(false)` when the habit does not exist.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn delete_habit(&self, owner: &str, title: &str) -> Result<bool, HabitError> {
        let Some(habit) = self.habits.find_by_owner_and_title(owner, title)? else {
            debug!("event=habit_delete module=tracker status=not_found owner={owner}");
            return Ok(false);
        };

        let removed_records = self.records.delete_by_habit(habit.id)?;
        let deleted = self.habits.delete(&habit)?;

        info!(
            "event=habit_delete module=tracker status=ok habit_id={} records_removed={removed_records}",
            habit.id
        );
        Ok(deleted)
    }

    /// Resolve a habit by owner and title.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn find_habit(&self, owner: &str, title: &str) -> Result<Option<Habit>, HabitError> {
        self.habits.find_by_owner_and_title(owner, title)
    }

    /// All habits of `owner`, ordered by title.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn list_habits(&self, owner: &str) -> Result<Vec<Habit>, HabitError> {
        self.habits.list_by_owner(owner)
    }

    /// Record the completion state of `habit` on `date`.
    ///
    /// Creates the record on first use and overwrites `completed` after that,
    /// so repeated calls converge to a single record holding the last value.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn track_completion(
        &self,
        habit: &Habit,
        date: NaiveDate,
        completed: bool,
    ) -> Result<HabitRecord, HabitError> {
        let record = self
            .records
            .upsert(&HabitRecord::new(habit.id, date, completed))?;

        info!(
            "event=completion_track module=tracker status=ok habit_id={} date={date} completed={completed}",
            habit.id
        );
        Ok(record)
    }

    /// Flip an existing record from `old_completed` to `new_completed`.
    ///
    /// Does nothing when the two values are equal or when no record exists
    /// for the date; a missing record is never created here. Returns whether
    /// a record was written.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn edit_completion(
        &self,
        habit: &Habit,
        date: NaiveDate,
        old_completed: bool,
        new_completed: bool,
    ) -> Result<bool, HabitError> {
        if old_completed == new_completed {
            return Ok(false);
        }

        let Some(mut record) = self.records.find_by_habit_and_date(habit.id, date)? else {
            debug!(
                "event=completion_edit module=tracker status=not_found habit_id={} date={date}",
                habit.id
            );
            return Ok(false);
        };

        record.completed = new_completed;
        let updated = self.records.update(&record)?;
        info!(
            "event=completion_edit module=tracker status=ok habit_id={} date={date} completed={new_completed}",
            habit.id
        );
        Ok(updated)
    }

    /// Remove the record for `habit` on `date`, if any.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn delete_completion(&self, habit: &Habit, date: NaiveDate) -> Result<bool, HabitError> {
        let Some(record) = self.records.find_by_habit_and_date(habit.id, date)? else {
            return Ok(false);
        };

        let deleted = self.records.delete(&record)?;
        info!(
            "event=completion_delete module=tracker status=ok habit_id={} date={date}",
            habit.id
        );
        Ok(deleted)
    }

    /// The record for `habit` on `date`, if any.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn find_completion(
        &self,
        habit: &Habit,
        date: NaiveDate,
    ) -> Result<Option<HabitRecord>, HabitError> {
        self.records.find_by_habit_and_date(habit.id, date)
    }

    /// Every record of `habit`, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn list_completions(&self, habit: &Habit) -> Result<Vec<HabitRecord>, HabitError> {
        let mut records = self.records.list_by_habit(habit.id)?;
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

fn normalize_title(title: &str) -> Result<String, HabitError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(HabitError::validation("habit title cannot be empty"));
    }
    Ok(trimmed.to_string())
}
