//! Core date and input handling shared by the tracker and statistics.

pub mod input;
pub mod period;

pub use input::{parse_completed, parse_date, parse_frequency, DATE_FORMAT};
