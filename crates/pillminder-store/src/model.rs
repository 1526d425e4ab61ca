//! Reminder records.

use serde::{Deserialize, Serialize};

/// One scheduled medication intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    /// Who the reminder is for.
    pub name: String,
    pub medication: String,
    /// Free-form schedule label such as `08:00`.
    pub time: String,
    pub is_taken: bool,
}

/// Fields supplied when creating a reminder. `is_taken` always starts false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub name: String,
    pub medication: String,
    pub time: String,
}

impl NewReminder {
    pub fn new(
        name: impl Into<String>,
        medication: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            medication: medication.into(),
            time: time.into(),
        }
    }
}
