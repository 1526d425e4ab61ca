//! Reminder persistence and the medicine lookup table for Pillminder.

pub mod catalog;
pub mod error;
pub mod model;
pub mod sqlite;

/// Medicine lookup table.
pub use catalog::{MedicineCatalog, MedicineEntry, UNKNOWN_MEDICINE};
/// Store error type.
pub use error::StoreError;
/// Reminder records.
pub use model::{NewReminder, Reminder};
/// Store interface and the default SQLite implementation.
pub use sqlite::{ReminderStore, SqliteReminderStore};
