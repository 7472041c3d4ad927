//! Collaborator fetch errors.

use thiserror::Error;

/// Errors from outbound collaborator calls.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed (network, timeout, HTTP status).
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not the shape we expected.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}
