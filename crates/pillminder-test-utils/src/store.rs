//! Reminder stores that fail on demand.

use pillminder_store::{NewReminder, Reminder, ReminderStore, StoreError};

/// A store whose every operation fails, as if the database were unreachable.
#[derive(Debug, Clone, Default)]
pub struct FailingReminderStore;

impl FailingReminderStore {
    fn unavailable() -> StoreError {
        StoreError::Unavailable("database is locked".to_string())
    }
}

impl ReminderStore for FailingReminderStore {
    fn create(&self, _reminder: &NewReminder) -> Result<i64, StoreError> {
        Err(Self::unavailable())
    }

    fn list(&self) -> Result<Vec<Reminder>, StoreError> {
        Err(Self::unavailable())
    }

    fn get(&self, _id: i64) -> Result<Option<Reminder>, StoreError> {
        Err(Self::unavailable())
    }

    fn set_taken(&self, _id: i64, _is_taken: bool) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }
}
