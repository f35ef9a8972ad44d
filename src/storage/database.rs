//! `SQLite` database connection.
//!
//! The database lives at `~/.habitrack/habitrack.db` (or under
//! `$HABITRACK_HOME`) and holds the `habits` and `habit_records` tables.

use std::path::Path;

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::HabitError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database described by `paths`.
    ///
    /// Creates the data directory and the database file, then runs migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, HabitError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, HabitError> {
        let conn = Connection::open(path).map_err(|e| {
            HabitError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        log::debug!(
            "event=db_open module=storage status=ok path={}",
            path.display()
        );
        Self::init(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, HabitError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            HabitError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, HabitError> {
        // habit_records declares ON DELETE CASCADE.
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| HabitError::Database(format!("Failed to enable foreign keys: {e}")))?;

        let db = Self { conn };
        migrations::run(&db.conn)?;
        Ok(db)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, HabitError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
