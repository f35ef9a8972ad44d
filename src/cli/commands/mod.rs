//! Command implementations for habitrack.
//!
//! Every command takes a [`Context`] and returns the text to print.

mod completions;
mod habit;
mod record;
mod stats;

pub use completions::{completions, generate_completions};
pub use habit::{add, delete, edit, list, track};
pub use record::record;
pub use stats::stats;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::HabitError;
use crate::features::stats::StatisticsEngine;
use crate::features::tracker::HabitTracker;
use crate::model::Habit;
use crate::storage::{HabitStore, RecordStore};

/// Everything a command needs for one invocation.
pub struct Context<'a> {
    pub tracker: HabitTracker<'a>,
    pub engine: StatisticsEngine<'a>,
    pub config: &'a Config,
    pub owner: String,
    pub today: NaiveDate,
    pub format: OutputFormat,
}

impl<'a> Context<'a> {
    /// Wire the tracker and statistics engine over the same stores.
    #[must_use]
    pub fn new(
        habits: &'a dyn HabitStore,
        records: &'a dyn RecordStore,
        config: &'a Config,
        owner: String,
        today: NaiveDate,
        format: OutputFormat,
    ) -> Self {
        Self {
            tracker: HabitTracker::new(habits, records),
            engine: StatisticsEngine::new(habits, records).as_of(today),
            config,
            owner,
            today,
            format,
        }
    }

    /// Look up one of the owner's habits, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `HabitError::NotFound` for an unknown title and propagates
    /// store failures.
    pub fn require_habit(&self, title: &str) -> Result<Habit, HabitError> {
        self.tracker
            .find_habit(&self.owner, title)?
            .ok_or_else(|| not_found(&self.owner, title))
    }
}

fn not_found(owner: &str, title: &str) -> HabitError {
    HabitError::NotFound(format!("habit '{}' for {owner}", title.trim()))
}
