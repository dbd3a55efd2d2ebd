//! Forecast error types.

use thiserror::Error;

/// Errors that can occur during forecasting operations.
///
/// `InsufficientData` is a recoverable, displayable state ("not
/// enough history yet"), not a fault.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Fewer history points than the model needs.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;
