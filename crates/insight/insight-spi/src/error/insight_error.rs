//! Insight error types.

use thiserror::Error;

/// Cost insight errors.
#[derive(Debug, Error)]
pub enum InsightError {
    /// Invalid detector or summary tuning.
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for insight operations.
pub type Result<T> = std::result::Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = InsightError::InvalidParameter {
            name: "spike_sigma".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter: spike_sigma - must be positive");
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InsightError>();
    }
}
