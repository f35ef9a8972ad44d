//! Storage layer for habitrack.
//!
//! Defines the [`HabitStore`] and [`RecordStore`] contracts and provides:
//! - `SQLite` persistence (`habits`, `habit_records` tables)
//! - In-memory stores for tests and throwaway sessions

mod database;
mod memory;
mod migrations;
mod sqlite;
mod traits;

pub use database::Database;
pub use memory::{MemoryHabitStore, MemoryRecordStore};
pub use sqlite::{SqliteHabitStore, SqliteRecordStore};
pub use traits::{HabitStore, RecordStore};

#[cfg(test)]
pub use traits::{MockHabitStore, MockRecordStore};
