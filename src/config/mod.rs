//! Configuration management for habitrack.
//!
//! This module handles loading configuration from `~/.habitrack/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, StatsConfig};
