//! SQLite-backed reminder store.

use crate::error::StoreError;
use crate::model::{NewReminder, Reminder};
use log::{debug, info};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

/// Persistent store abstraction for reminders.
///
/// Implementations must make `create` all-or-nothing and must never reuse an
/// id handed out by `create`.
pub trait ReminderStore: Send + Sync {
    /// Insert a reminder with `is_taken = false` and return its id.
    fn create(&self, reminder: &NewReminder) -> Result<i64, StoreError>;
    /// All reminders in id order.
    fn list(&self) -> Result<Vec<Reminder>, StoreError>;
    /// Fetch a reminder by id.
    fn get(&self, id: i64) -> Result<Option<Reminder>, StoreError>;
    /// Update the taken flag. Unknown ids fail with `StoreError::NotFound`.
    fn set_taken(&self, id: i64, is_taken: bool) -> Result<(), StoreError>;
}

const CREATE_REMINDERS: &str = "
    CREATE TABLE IF NOT EXISTS reminders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        medication TEXT NOT NULL,
        time TEXT NOT NULL,
        is_taken INTEGER NOT NULL DEFAULT 0
    )";

/// Reminder store over a single SQLite file.
///
/// One connection is owned for the lifetime of the store; each operation
/// holds the lock for exactly one statement.
#[derive(Debug)]
pub struct SqliteReminderStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteReminderStore {
    /// Open (or create) the database file and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        init_schema(&conn)?;
        info!("opened reminder store (path={})", path.display());
        Ok(Self {
            path: Some(path),
            conn: Mutex::new(conn),
        })
    }

    /// Private in-memory database, gone when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        debug!("opened in-memory reminder store");
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}

impl ReminderStore for SqliteReminderStore {
    fn create(&self, reminder: &NewReminder) -> Result<i64, StoreError> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO reminders (name, medication, time, is_taken) VALUES (?1, ?2, ?3, 0)",
            params![reminder.name, reminder.medication, reminder.time],
        )?;
        let id = conn.last_insert_rowid();
        debug!(
            "inserted reminder (id={id}, name_len={}, medication_len={})",
            reminder.name.len(),
            reminder.medication.len()
        );
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Reminder>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, medication, time, is_taken FROM reminders ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], row_to_reminder)?;
        let reminders = rows.collect::<Result<Vec<_>, _>>()?;
        debug!("listed reminders (count={})", reminders.len());
        Ok(reminders)
    }

    fn get(&self, id: i64) -> Result<Option<Reminder>, StoreError> {
        let conn = self.conn();
        let reminder = conn
            .query_row(
                "SELECT id, name, medication, time, is_taken FROM reminders WHERE id = ?1",
                params![id],
                row_to_reminder,
            )
            .optional()?;
        Ok(reminder)
    }

    fn set_taken(&self, id: i64, is_taken: bool) -> Result<(), StoreError> {
        let conn = self.conn();
        let changed = conn.execute(
            "UPDATE reminders SET is_taken = ?1 WHERE id = ?2",
            params![is_taken, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!("updated reminder status (id={id}, is_taken={is_taken})");
        Ok(())
    }
}

/// Create the table, and add `is_taken` to tables written before it existed.
fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(CREATE_REMINDERS)?;
    if !table_has_column(conn, "reminders", "is_taken")? {
        info!("adding missing is_taken column to reminders");
        conn.execute_batch(
            "ALTER TABLE reminders ADD COLUMN is_taken INTEGER NOT NULL DEFAULT 0",
        )?;
    }
    Ok(())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool, StoreError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Older databases allowed NULL text columns and flags; read them as empty/false.
fn row_to_reminder(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reminder> {
    Ok(Reminder {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        medication: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        time: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        is_taken: row.get::<_, Option<i64>>(4)?.unwrap_or(0) != 0,
    })
}
