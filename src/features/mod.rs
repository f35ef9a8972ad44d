//! Habit tracking and statistics features.

pub mod stats;
pub mod tracker;
