//! SQLite-based habit storage.
//!
//! Provides persistent storage for:
//! - Registered habits (name, task specification, cadence)
//! - Completion dates per habit
//!
//! Completion histories are returned in ISO calendar order so they can be
//! handed straight to [`crate::analysis`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations, HabitRepository};
use crate::analysis::iso_sort_key;
use crate::error::{DatabaseError, Result};
use crate::habit::{parse_date, Cadence, CadenceFilter, Habit, DATE_FORMAT};

/// SQLite database for habits and their completions.
pub struct HabitDb {
    conn: Connection,
}

impl HabitDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data_dir>/habitrack.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("habitrack.db"))
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened habit database");
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    // === Habit CRUD ===

    /// Register a new habit.
    ///
    /// # Errors
    /// Returns [`DatabaseError::HabitExists`] if the name is already taken.
    pub fn create_habit(&self, habit: &Habit) -> Result<()> {
        if self.habit_exists(&habit.name)? {
            return Err(DatabaseError::HabitExists {
                name: habit.name.clone(),
            }
            .into());
        }
        self.conn.execute(
            "INSERT INTO habits (name, task_specification, cadence, created_on)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                habit.name,
                habit.task_specification,
                habit.cadence.as_str(),
                habit.created_on.format(DATE_FORMAT).to_string(),
            ],
        )?;
        tracing::debug!(habit = %habit.name, cadence = %habit.cadence, "habit created");
        Ok(())
    }

    /// Get a habit by name.
    pub fn get_habit(&self, name: &str) -> Result<Option<Habit>> {
        let row = self
            .conn
            .query_row(
                "SELECT name, task_specification, cadence, created_on FROM habits WHERE name = ?1",
                params![name],
                raw_habit_row,
            )
            .optional()?;
        row.map(RawHabit::into_habit).transpose()
    }

    /// List habits matching `filter`, ordered by name.
    pub fn list_habits(&self, filter: CadenceFilter) -> Result<Vec<Habit>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, task_specification, cadence, created_on FROM habits
             WHERE ?1 IS NULL OR cadence = ?1
             ORDER BY name",
        )?;
        let cadence = filter.cadence().map(|c| c.as_str());
        let rows = stmt
            .query_map(params![cadence], raw_habit_row)?
            .collect::<Result<Vec<RawHabit>, _>>()?;

        rows.into_iter().map(RawHabit::into_habit).collect()
    }

    /// Delete a habit together with all of its completions.
    pub fn delete_habit(&self, name: &str) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM completions WHERE habit_name = ?1", params![name])?;
        let deleted = tx.execute("DELETE FROM habits WHERE name = ?1", params![name])?;
        if deleted == 0 {
            // Dropping the transaction rolls back.
            return Err(DatabaseError::HabitNotFound { name: name.into() }.into());
        }
        tx.commit()?;
        tracing::debug!(habit = name, "habit deleted");
        Ok(())
    }

    // === Completions ===

    /// Record that `name` was completed on `date`.
    ///
    /// # Errors
    /// Returns [`DatabaseError::HabitNotFound`] for an unknown habit and
    /// [`DatabaseError::DuplicateCompletion`] if the date is already recorded.
    pub fn complete_habit(&self, name: &str, date: NaiveDate) -> Result<()> {
        self.require_habit(name)?;
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO completions (habit_name, completed_on) VALUES (?1, ?2)",
            params![name, date.format(DATE_FORMAT).to_string()],
        )?;
        if inserted == 0 {
            return Err(DatabaseError::DuplicateCompletion {
                name: name.into(),
                date,
            }
            .into());
        }
        tracing::debug!(habit = name, %date, "completion recorded");
        Ok(())
    }

    /// Remove a single completion date.
    pub fn delete_completion(&self, name: &str, date: NaiveDate) -> Result<()> {
        self.require_habit(name)?;
        let deleted = self.conn.execute(
            "DELETE FROM completions WHERE habit_name = ?1 AND completed_on = ?2",
            params![name, date.format(DATE_FORMAT).to_string()],
        )?;
        if deleted == 0 {
            return Err(DatabaseError::CompletionNotFound {
                name: name.into(),
                date,
            }
            .into());
        }
        tracing::debug!(habit = name, %date, "completion deleted");
        Ok(())
    }

    /// All completion dates of a habit in ISO (week-year, week, weekday) order.
    pub fn completion_dates(&self, name: &str) -> Result<Vec<NaiveDate>> {
        self.require_habit(name)?;
        let mut stmt = self
            .conn
            .prepare("SELECT completed_on FROM completions WHERE habit_name = ?1")?;
        let raw = stmt
            .query_map(params![name], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<String>, _>>()?;

        let mut dates = raw
            .iter()
            .map(|s| parse_date(s))
            .collect::<Result<Vec<NaiveDate>, _>>()?;
        dates.sort_by_key(iso_sort_key);
        Ok(dates)
    }

    fn habit_exists(&self, name: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM habits WHERE name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn require_habit(&self, name: &str) -> Result<()> {
        if self.habit_exists(name)? {
            Ok(())
        } else {
            Err(DatabaseError::HabitNotFound { name: name.into() }.into())
        }
    }
}

impl HabitRepository for HabitDb {
    fn cadence(&self, habit: &str) -> Result<Cadence> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT cadence FROM habits WHERE name = ?1",
                params![habit],
                |row| row.get(0),
            )
            .optional()?;
        let raw = raw.ok_or_else(|| DatabaseError::HabitNotFound { name: habit.into() })?;
        Ok(raw.parse::<Cadence>()?)
    }

    fn history(&self, habit: &str) -> Result<Vec<NaiveDate>> {
        self.completion_dates(habit)
    }
}

/// Row as stored, before the cadence and date strings are validated.
struct RawHabit {
    name: String,
    task_specification: String,
    cadence: String,
    created_on: String,
}

impl RawHabit {
    fn into_habit(self) -> Result<Habit> {
        Ok(Habit {
            cadence: self.cadence.parse()?,
            created_on: parse_date(&self.created_on)?,
            name: self.name,
            task_specification: self.task_specification,
        })
    }
}

fn raw_habit_row(row: &rusqlite::Row) -> Result<RawHabit, rusqlite::Error> {
    Ok(RawHabit {
        name: row.get(0)?,
        task_specification: row.get(1)?,
        cadence: row.get(2)?,
        created_on: row.get(3)?,
    })
}
