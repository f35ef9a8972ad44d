//! File logging bootstrap.
//!
//! Logs are written under `<root>/logs/` and rotated by size. Events are
//! single key=value lines such as `event=habit_create module=tracker status=ok`.
//!
//! Initialization happens at most once per process and never panics. A
//! second call with the same directory is a no-op; a different directory is
//! rejected.
//!
//! The handle lives in a static and is never dropped, so records are
//! written straight to the file instead of through a buffer.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::HabitError;

const LOG_FILE_BASENAME: &str = "habitrack";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    logger: LoggerHandle,
}

/// Start file logging at `level` into `log_dir`.
///
/// # Errors
///
/// Returns `HabitError::Config` for an unknown level, an unusable
/// directory, or when logging is already active in another directory.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), HabitError> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_same_dir(state, log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, HabitError> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            HabitError::Config(format!(
                "Failed to create log directory {}: {e}",
                log_dir.display()
            ))
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|e| HabitError::Config(format!("Invalid log level {level}: {e}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| HabitError::Config(format!("Failed to start logger: {e}")))?;

        info!(
            "event=app_start module=logging status=ok version={} level={level} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            log_dir.display()
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            logger,
        })
    })?;

    check_same_dir(state, log_dir)
}

/// Active `(level, directory)`, or `None` before initialization.
#[must_use]
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Flush pending log output. Call before `std::process::exit`.
pub fn flush_logs() {
    if let Some(state) = LOGGING_STATE.get() {
        state.logger.flush();
    }
}

fn check_same_dir(state: &LoggingState, log_dir: &Path) -> Result<(), HabitError> {
    if state.log_dir == log_dir {
        Ok(())
    } else {
        Err(HabitError::Config(format!(
            "Logging already initialized at {}; refusing to switch to {}",
            state.log_dir.display(),
            log_dir.display()
        )))
    }
}

fn normalize_level(level: &str) -> Result<&'static str, HabitError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(HabitError::Config(format!(
            "Unsupported log level '{other}'; expected trace|debug|info|warn|error|off"
        ))),
    }
}
