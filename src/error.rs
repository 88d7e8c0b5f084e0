// src/error.rs
use thiserror::Error;

/// Errors from the UI-state persistence layer. The tree/canonicalization
/// core itself never fails; malformed codes degrade to displayable data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("settings lock poisoned: {0}")]
    Lock(String),

    #[error("state serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
