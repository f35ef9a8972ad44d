//! Statistics module.
//!
//! Turns a habit's completion records into:
//! - Current and longest streaks
//! - Success rates over a date range
//! - Progress reports and per-owner summaries
//! - History strips for the terminal

mod engine;
pub mod rate;
mod report;
pub mod streak;
pub mod visualization;

pub use engine::StatisticsEngine;
pub use rate::{PeriodState, PeriodStatus, PeriodTally};
pub use report::ProgressReport;
pub use visualization::{render_history, render_rate_bar};
