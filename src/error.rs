//! Error types for habitrack.

use thiserror::Error;

/// Errors produced by habit tracking, statistics and the CLI surface.
#[derive(Debug, Error)]
pub enum HabitError {
    /// A habit with the same title already exists for the owner.
    #[error("Habit already exists: {0}")]
    Duplicate(String),

    /// A habit or record the caller expected to exist does not resolve.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input at the boundary (date, frequency, boolean).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The database could not be opened, migrated or queried.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HabitError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error describes bad user input rather than a system failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Duplicate(_) | Self::NotFound(_) | Self::Validation(_)
        )
    }
}

impl From<rusqlite::Error> for HabitError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for HabitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HabitError::Duplicate("Read".to_string());
        assert_eq!(err.to_string(), "Habit already exists: Read");

        let err = HabitError::validation("bad date `2024-13-01`");
        assert_eq!(err.to_string(), "Invalid input: bad date `2024-13-01`");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(HabitError::NotFound("x".into()).is_user_error());
        assert!(HabitError::Validation("x".into()).is_user_error());
        assert!(!HabitError::Database("x".into()).is_user_error());
    }

    #[test]
    fn test_from_rusqlite() {
        let err: HabitError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, HabitError::Database(_)));
    }
}
