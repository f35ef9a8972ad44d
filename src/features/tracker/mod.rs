//! Habit tracking module.
//!
//! Owns the habit lifecycle and the completion upsert rule.

mod service;

pub use service::HabitTracker;
