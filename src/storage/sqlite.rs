//! `SQLite`-backed habit and record stores.
//!
//! Both stores borrow one [`Database`] so they share a connection and can be
//! handed to the tracker and the statistics engine side by side.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, ErrorCode, OptionalExtension, Row};

use super::traits::{HabitStore, RecordStore};
use super::Database;
use crate::core::DATE_FORMAT;
use crate::error::HabitError;
use crate::model::{title_key, Frequency, Habit, HabitId, HabitRecord, NewHabit};

const HABIT_COLUMNS: &str = "id, owner, title, description, frequency";

/// Habit storage over the `habits` table.
pub struct SqliteHabitStore<'db> {
    db: &'db Database,
}

impl<'db> SqliteHabitStore<'db> {
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl HabitStore for SqliteHabitStore<'_> {
    fn find_by_owner_and_title(
        &self,
        owner: &str,
        title: &str,
    ) -> Result<Option<Habit>, HabitError> {
        let conn = self.db.connection();

        conn.query_row(
            &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE owner = ?1 AND title_key = ?2"),
            params![owner, title_key(title)],
            row_to_habit,
        )
        .optional()
        .map_err(|e| db_error("Failed to query habit", &e))
    }

    fn save(&self, habit: &NewHabit) -> Result<Habit, HabitError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO habits (owner, title, title_key, description, frequency)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                habit.owner,
                habit.title,
                title_key(&habit.title),
                habit.description,
                habit.frequency.as_str(),
            ],
        )
        .map_err(|e| constraint_or_db(e, &habit.title, "Failed to insert habit"))?;

        Ok(Habit {
            id: conn.last_insert_rowid(),
            owner: habit.owner.clone(),
            title: habit.title.clone(),
            description: habit.description.clone(),
            frequency: habit.frequency,
        })
    }

    fn update(&self, habit: &Habit) -> Result<bool, HabitError> {
        let changed = self
            .db
            .connection()
            .execute(
                r"UPDATE habits SET
                  title = ?1,
                  title_key = ?2,
                  description = ?3,
                  frequency = ?4
                  WHERE id = ?5",
                params![
                    habit.title,
                    title_key(&habit.title),
                    habit.description,
                    habit.frequency.as_str(),
                    habit.id,
                ],
            )
            .map_err(|e| constraint_or_db(e, &habit.title, "Failed to update habit"))?;

        Ok(changed > 0)
    }

    fn delete(&self, habit: &Habit) -> Result<bool, HabitError> {
        let tx = self
            .db
            .connection()
            .unchecked_transaction()
            .map_err(|e| db_error("Failed to begin transaction", &e))?;

        tx.execute("DELETE FROM habit_records WHERE habit_id = ?1", [habit.id])
            .map_err(|e| db_error("Failed to delete habit records", &e))?;
        let changed = tx
            .execute("DELETE FROM habits WHERE id = ?1", [habit.id])
            .map_err(|e| db_error("Failed to delete habit", &e))?;

        tx.commit()
            .map_err(|e| db_error("Failed to commit habit delete", &e))?;
        Ok(changed > 0)
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Habit>, HabitError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {HABIT_COLUMNS} FROM habits WHERE owner = ?1 ORDER BY title_key"
            ))
            .map_err(|e| db_error("Failed to prepare query", &e))?;

        let rows = stmt
            .query_map([owner], row_to_habit)
            .map_err(|e| db_error("Failed to query habits", &e))?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row.map_err(|e| db_error("Failed to read habit", &e))?);
        }

        Ok(habits)
    }
}

/// Record storage over the `habit_records` table.
pub struct SqliteRecordStore<'db> {
    db: &'db Database,
}

impl<'db> SqliteRecordStore<'db> {
    #[must_use]
    pub const fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn find_by_habit_and_date(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitRecord>, HabitError> {
        self.db
            .connection()
            .query_row(
                r"SELECT habit_id, date, completed FROM habit_records
                  WHERE habit_id = ?1 AND date = ?2",
                params![habit_id, date_to_db(date)],
                row_to_record,
            )
            .optional()
            .map_err(|e| db_error("Failed to query record", &e))
    }

    fn exists_for_date(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, HabitError> {
        self.db
            .connection()
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM habit_records WHERE habit_id = ?1 AND date = ?2)",
                params![habit_id, date_to_db(date)],
                |row| row.get(0),
            )
            .map_err(|e| db_error("Failed to query record", &e))
    }

    fn save(&self, record: &HabitRecord) -> Result<(), HabitError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO habit_records (habit_id, date, completed) VALUES (?1, ?2, ?3)",
                params![record.habit_id, date_to_db(record.date), record.completed],
            )
            .map_err(|e| db_error("Failed to insert record", &e))?;
        Ok(())
    }

    fn update(&self, record: &HabitRecord) -> Result<bool, HabitError> {
        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE habit_records SET completed = ?1 WHERE habit_id = ?2 AND date = ?3",
                params![record.completed, record.habit_id, date_to_db(record.date)],
            )
            .map_err(|e| db_error("Failed to update record", &e))?;
        Ok(changed > 0)
    }

    fn delete(&self, record: &HabitRecord) -> Result<bool, HabitError> {
        let changed = self
            .db
            .connection()
            .execute(
                "DELETE FROM habit_records WHERE habit_id = ?1 AND date = ?2",
                params![record.habit_id, date_to_db(record.date)],
            )
            .map_err(|e| db_error("Failed to delete record", &e))?;
        Ok(changed > 0)
    }

    fn list_by_habit(&self, habit_id: HabitId) -> Result<Vec<HabitRecord>, HabitError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT habit_id, date, completed FROM habit_records WHERE habit_id = ?1")
            .map_err(|e| db_error("Failed to prepare query", &e))?;

        let rows = stmt
            .query_map([habit_id], row_to_record)
            .map_err(|e| db_error("Failed to query records", &e))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| db_error("Failed to read record", &e))?);
        }

        Ok(records)
    }

    fn delete_by_habit(&self, habit_id: HabitId) -> Result<usize, HabitError> {
        self.db
            .connection()
            .execute("DELETE FROM habit_records WHERE habit_id = ?1", [habit_id])
            .map_err(|e| db_error("Failed to delete records", &e))
    }

    fn upsert(&self, record: &HabitRecord) -> Result<HabitRecord, HabitError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO habit_records (habit_id, date, completed) VALUES (?1, ?2, ?3)
                  ON CONFLICT (habit_id, date) DO UPDATE SET completed = excluded.completed",
                params![record.habit_id, date_to_db(record.date), record.completed],
            )
            .map_err(|e| db_error("Failed to upsert record", &e))?;
        Ok(*record)
    }
}

fn row_to_habit(row: &Row<'_>) -> rusqlite::Result<Habit> {
    let frequency_text: String = row.get(4)?;
    let frequency = frequency_text
        .parse::<Frequency>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Habit {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        frequency,
    })
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<HabitRecord> {
    let date_text: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(HabitRecord {
        habit_id: row.get(0)?,
        date,
        completed: row.get(2)?,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn db_error(context: &str, err: &rusqlite::Error) -> HabitError {
    log::error!("event=db_query module=storage status=error context=\"{context}\" error=\"{err}\"");
    HabitError::Database(format!("{context}: {err}"))
}

fn constraint_or_db(err: rusqlite::Error, title: &str, context: &str) -> HabitError {
    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => HabitError::Duplicate(title.to_string()),
        _ => db_error(context, &err),
    }
}
