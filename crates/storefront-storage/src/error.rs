//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Storage backend could not be opened (e.g., localStorage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Backend read/write failure (e.g., quota exceeded).
    #[error("Storage error: {0}")]
    Backend(String),

    /// Stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
