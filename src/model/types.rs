//! Habit, record and cadence types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HabitError;

/// Store-assigned habit identifier.
pub type HabitId = i64;

/// How often a habit is expected to be performed.
///
/// The frequency selects the period unit used for bucketing records into
/// streaks and success rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    /// Once per calendar day.
    Daily,
    /// Once per Monday–Sunday week.
    Weekly,
}

impl Frequency {
    /// Canonical storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
        }
    }

    /// Singular name of one period, for display.
    #[must_use]
    pub const fn period_name(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Self::Daily),
            "WEEKLY" => Ok(Self::Weekly),
            other => Err(HabitError::validation(format!(
                "unknown frequency `{other}`; expected DAILY or WEEKLY"
            ))),
        }
    }
}

/// A persisted habit owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
}

impl Habit {
    /// Case-insensitive title comparison, the uniqueness rule within an owner.
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        title_key(&self.title) == title_key(title)
    }
}

/// A habit that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
}

/// Completion state of one habit on one calendar date.
///
/// At most one record exists per `(habit_id, date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub completed: bool,
}

impl HabitRecord {
    #[must_use]
    pub const fn new(habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id,
            date,
            completed,
        }
    }
}

/// Normalized key used for case-insensitive title lookups.
#[must_use]
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parse_case_insensitive() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(" WEEKLY ".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("Weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
    }

    #[test]
    fn test_frequency_parse_rejects_unknown() {
        let err = "monthly".parse::<Frequency>().unwrap_err();
        assert!(matches!(err, HabitError::Validation(_)));
    }

    #[test]
    fn test_frequency_serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&Frequency::Weekly).unwrap();
        assert_eq!(json, "\"WEEKLY\"");
    }

    #[test]
    fn test_has_title_ignores_case() {
        let habit = Habit {
            id: 1,
            owner: "ana".to_string(),
            title: "Go to shower".to_string(),
            description: String::new(),
            frequency: Frequency::Daily,
        };
        assert!(habit.has_title("go TO shower"));
        assert!(!habit.has_title("go to gym"));
    }
}
