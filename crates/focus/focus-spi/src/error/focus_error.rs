//! Canonical model error types.

use thiserror::Error;

/// Errors from validation, normalization and batch ingestion.
///
/// Nothing here is fatal: a rejected row or batch is a displayable
/// outcome the caller decides how to handle.
#[derive(Debug, Error)]
pub enum FocusError {
    /// A single row failed the schema gate.
    #[error("Invalid row: {}", errors.join(", "))]
    InvalidRow { errors: Vec<String> },

    /// A batch was rejected because its validation sample contained
    /// failing rows.
    #[error("Batch rejected: {} row(s) failed validation", errors.len())]
    BatchRejected { errors: Vec<String> },

    /// Caller contract violation, e.g. a non-positive useful life.
    #[error("Invalid input: {name} - {reason}")]
    InvalidInput { name: String, reason: String },
}

/// Result type for canonical model operations.
pub type Result<T> = std::result::Result<T, FocusError>;
