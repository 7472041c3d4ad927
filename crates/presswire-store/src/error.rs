//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to the backing catalog store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend request failed (network, HTTP status, platform error).
    #[error("Backend error: {0}")]
    Backend(String),

    /// A row could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// No row matched.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e.to_string())
    }
}
