//! In-memory stores.
//!
//! Used by tests and by callers that want a throwaway tracker. Records are
//! kept in a `HashMap`, so listing order is arbitrary.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::traits::{HabitStore, RecordStore};
use crate::error::HabitError;
use crate::model::{title_key, Habit, HabitId, HabitRecord, NewHabit};

/// Habit storage backed by a map from id to habit.
#[derive(Debug)]
pub struct MemoryHabitStore {
    habits: RefCell<BTreeMap<HabitId, Habit>>,
    next_id: Cell<HabitId>,
}

impl MemoryHabitStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            habits: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }

    fn title_taken(&self, owner: &str, title: &str, except: Option<HabitId>) -> bool {
        let key = title_key(title);
        self.habits.borrow().values().any(|h| {
            h.owner == owner && title_key(&h.title) == key && Some(h.id) != except
        })
    }
}

impl Default for MemoryHabitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitStore for MemoryHabitStore {
    fn find_by_owner_and_title(
        &self,
        owner: &str,
        title: &str,
    ) -> Result<Option<Habit>, HabitError> {
        Ok(self
            .habits
            .borrow()
            .values()
            .find(|h| h.owner == owner && h.has_title(title))
            .cloned())
    }

    fn save(&self, habit: &NewHabit) -> Result<Habit, HabitError> {
        if self.title_taken(&habit.owner, &habit.title, None) {
            return Err(HabitError::Duplicate(habit.title.clone()));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let saved = Habit {
            id,
            owner: habit.owner.clone(),
            title: habit.title.clone(),
            description: habit.description.clone(),
            frequency: habit.frequency,
        };
        self.habits.borrow_mut().insert(id, saved.clone());
        Ok(saved)
    }

    fn update(&self, habit: &Habit) -> Result<bool, HabitError> {
        if self.title_taken(&habit.owner, &habit.title, Some(habit.id)) {
            return Err(HabitError::Duplicate(habit.title.clone()));
        }

        let mut habits = self.habits.borrow_mut();
        match habits.get_mut(&habit.id) {
            Some(existing) => {
                existing.title.clone_from(&habit.title);
                existing.description.clone_from(&habit.description);
                existing.frequency = habit.frequency;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, habit: &Habit) -> Result<bool, HabitError> {
        Ok(self.habits.borrow_mut().remove(&habit.id).is_some())
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Habit>, HabitError> {
        let mut habits: Vec<Habit> = self
            .habits
            .borrow()
            .values()
            .filter(|h| h.owner == owner)
            .cloned()
            .collect();
        habits.sort_by_key(|h| title_key(&h.title));
        Ok(habits)
    }
}

/// Record storage keyed by `(habit_id, date)`.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RefCell<HashMap<(HabitId, NaiveDate), HabitRecord>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all habits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn find_by_habit_and_date(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitRecord>, HabitError> {
        Ok(self.records.borrow().get(&(habit_id, date)).copied())
    }

    fn save(&self, record: &HabitRecord) -> Result<(), HabitError> {
        let mut records = self.records.borrow_mut();
        let key = (record.habit_id, record.date);
        if records.contains_key(&key) {
            return Err(HabitError::Database(format!(
                "record for habit {} on {} already exists",
                record.habit_id, record.date
            )));
        }
        records.insert(key, *record);
        Ok(())
    }

    fn update(&self, record: &HabitRecord) -> Result<bool, HabitError> {
        let mut records = self.records.borrow_mut();
        match records.get_mut(&(record.habit_id, record.date)) {
            Some(existing) => {
                existing.completed = record.completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, record: &HabitRecord) -> Result<bool, HabitError> {
        Ok(self
            .records
            .borrow_mut()
            .remove(&(record.habit_id, record.date))
            .is_some())
    }

    fn list_by_habit(&self, habit_id: HabitId) -> Result<Vec<HabitRecord>, HabitError> {
        Ok(self
            .records
            .borrow()
            .values()
            .filter(|r| r.habit_id == habit_id)
            .copied()
            .collect())
    }

    fn delete_by_habit(&self, habit_id: HabitId) -> Result<usize, HabitError> {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|(id, _), _| *id != habit_id);
        Ok(before - records.len())
    }

    fn upsert(&self, record: &HabitRecord) -> Result<HabitRecord, HabitError> {
        self.records
            .borrow_mut()
            .entry((record.habit_id, record.date))
            .and_modify(|existing| existing.completed = record.completed)
            .or_insert(*record);
        Ok(*record)
    }
}
