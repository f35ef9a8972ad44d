//! habitrack - a habit tracker for the command line
//!
//! This crate tracks daily and weekly habits in a local `SQLite` database
//! and computes streaks, success rates and progress reports from the
//! recorded completions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitError;
pub use features::stats::{ProgressReport, StatisticsEngine};
pub use features::tracker::HabitTracker;
pub use model::{Frequency, Habit, HabitRecord};
