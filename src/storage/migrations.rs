//! Database migrations for habitrack.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::HabitError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, HabitError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| HabitError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), HabitError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| HabitError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), HabitError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::info!("event=db_migrate module=storage status=start version={version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), HabitError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(HabitError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: habits and their completion records.
///
/// `title_key` holds the lowercased title so uniqueness per owner is
/// case-insensitive. `UNIQUE(habit_id, date)` enforces one record per day.
fn migrate_v1(conn: &Connection) -> Result<(), HabitError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner TEXT NOT NULL,
            title TEXT NOT NULL,
            title_key TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            frequency TEXT NOT NULL CHECK (frequency IN ('DAILY', 'WEEKLY')),
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE (owner, title_key)
        );

        CREATE INDEX IF NOT EXISTS idx_habits_owner
        ON habits(owner);

        CREATE TABLE IF NOT EXISTS habit_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            UNIQUE (habit_id, date)
        );
        ",
    )
    .map_err(|e| HabitError::Database(format!("Migration v1 failed: {e}")))
}
