//! Error types for GridKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GridError
pub type Result<T> = std::result::Result<T, GridError>;

/// Unified error type for GridKV operations
#[derive(Debug, Error)]
pub enum GridError {
    // -------------------------------------------------------------------------
    // Data Model Errors
    // -------------------------------------------------------------------------
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Null value not allowed in non-nullable column")]
    NullNotAllowed,

    #[error("Kind mismatch: column holds {expected}, value is {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Unsupported element kind: {0}")]
    UnsupportedKind(String),

    #[error("Value parse failed for {kind}: {value:?}")]
    ValueParse { kind: &'static str, value: String },

    #[error("Datetime format failed: {0}")]
    Format(#[from] time::error::Format),

    #[error("Range index {index} outside the bounds of the grid (len {len})")]
    RangeOutOfBounds { index: i64, len: usize },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    // The server message is the contract; it is surfaced verbatim.
    #[error("{0}")]
    Server(String),
}

impl GridError {
    /// True when this is the remote `Empty key` condition
    pub fn is_empty_key(&self) -> bool {
        matches!(self, GridError::Server(msg) if msg == "Empty key")
    }
}
