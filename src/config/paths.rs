//! Path resolution for habitrack configuration and data files.
//!
//! All data is stored in `~/.habitrack/`, or in `$HABITRACK_HOME` when set:
//! - `config.yaml` - Main configuration file
//! - `habitrack.db` - SQLite database of habits and records
//! - `logs/` - Rotated log files

use std::path::PathBuf;

use crate::error::HabitError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "HABITRACK_HOME";

/// Paths to habitrack configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.habitrack/`
    pub root: PathBuf,
    /// Config file: `~/.habitrack/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.habitrack/habitrack.db`
    pub database: PathBuf,
    /// Logs directory: `~/.habitrack/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Resolve paths from `$HABITRACK_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, HabitError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            HabitError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".habitrack")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitrack.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), HabitError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    HabitError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}
