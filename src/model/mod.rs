//! Domain types for habits and their completion records.

mod types;

pub use types::{title_key, Frequency, Habit, HabitId, HabitRecord, NewHabit};
