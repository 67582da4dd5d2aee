//! Deal error types.

use thiserror::Error;

/// Errors that can occur around the deal catalog.
///
/// Filtering never fails; these cover lookups, parsing seeded or
/// configured values, and the clipboard collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// Discount kind string not recognised.
    #[error("Invalid discount kind: {0} (expected percentage, fixed or free)")]
    InvalidDiscountKind(String),

    /// No deal carries the given redemption code.
    #[error("Deal not found: {0}")]
    DealNotFound(String),

    /// Count source string not recognised.
    #[error("Invalid count source: {0} (expected static or live)")]
    InvalidCountSource(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DealError {
    fn from(e: serde_json::Error) -> Self {
        DealError::Serialization(e.to_string())
    }
}
