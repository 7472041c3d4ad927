//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in placement commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Publication not found in the catalog.
    #[error("Publication not found: {0}")]
    PublicationNotFound(String),

    /// Attempted to build an order from an empty selection.
    #[error("Selection is empty")]
    EmptySelection,

    /// A required field was missing or blank.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A spreadsheet row could not be read.
    #[error("Import row {row}: {message}")]
    ImportRow { row: usize, message: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<csv::Error> for CommerceError {
    fn from(e: csv::Error) -> Self {
        CommerceError::ImportRow {
            row: 0,
            message: e.to_string(),
        }
    }
}
