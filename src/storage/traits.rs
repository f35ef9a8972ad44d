//! Persistence contracts consumed by the tracker and the statistics engine.

use chrono::NaiveDate;

use crate::error::HabitError;
use crate::model::{Habit, HabitId, HabitRecord, NewHabit};

/// Storage for habits, keyed by owner and case-insensitive title.
#[cfg_attr(test, mockall::automock)]
pub trait HabitStore {
    /// Look up a habit by owner and title (case-insensitive).
    fn find_by_owner_and_title(&self, owner: &str, title: &str)
        -> Result<Option<Habit>, HabitError>;

    /// Persist a new habit and return it with its assigned id.
    fn save(&self, habit: &NewHabit) -> Result<Habit, HabitError>;

    /// Overwrite title, description and frequency. Returns `false` if the id is unknown.
    fn update(&self, habit: &Habit) -> Result<bool, HabitError>;

    /// Remove a habit. Returns `false` if the id is unknown.
    fn delete(&self, habit: &Habit) -> Result<bool, HabitError>;

    /// All habits of an owner, ordered by title.
    fn list_by_owner(&self, owner: &str) -> Result<Vec<Habit>, HabitError>;
}

/// Storage for completion records, keyed by `(habit_id, date)`.
///
/// Implementations must never hold two records for the same key.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    fn find_by_habit_and_date(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitRecord>, HabitError>;

    fn exists_for_date(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, HabitError> {
        Ok(self.find_by_habit_and_date(habit_id, date)?.is_some())
    }

    /// Insert a record whose key is not yet present.
    fn save(&self, record: &HabitRecord) -> Result<(), HabitError>;

    /// Overwrite `completed` for an existing key. Returns `false` if absent.
    fn update(&self, record: &HabitRecord) -> Result<bool, HabitError>;

    /// Remove the record for the key. Returns `false` if absent.
    fn delete(&self, record: &HabitRecord) -> Result<bool, HabitError>;

    /// Every record of a habit, in no particular order.
    fn list_by_habit(&self, habit_id: HabitId) -> Result<Vec<HabitRecord>, HabitError>;

    /// Remove every record of a habit, returning how many were removed.
    fn delete_by_habit(&self, habit_id: HabitId) -> Result<usize, HabitError>;

    /// Create the record if its key is absent, otherwise overwrite `completed`.
    ///
    /// The default is a check-then-write; stores shared between writers
    /// override it with a single atomic operation.
    fn upsert(&self, record: &HabitRecord) -> Result<HabitRecord, HabitError> {
        if self.exists_for_date(record.habit_id, record.date)? {
            self.update(record)?;
        } else {
            self.save(record)?;
        }
        Ok(*record)
    }
}
