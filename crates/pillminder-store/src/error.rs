//! Error types for reminder persistence.

use thiserror::Error;

/// Errors returned by reminder stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite rejected a statement or could not open the database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Preparing the database location failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// No reminder has the given id.
    #[error("reminder not found: {0}")]
    NotFound(i64),
    /// The store could not be reached (blocking task lost, backend offline).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
