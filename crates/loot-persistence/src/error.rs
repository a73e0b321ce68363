//! Error types for repository and snapshot operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur at the storage boundary.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read from file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse or produce JSON.
    #[error("failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Entity not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// The repository refused or could not take the update.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
