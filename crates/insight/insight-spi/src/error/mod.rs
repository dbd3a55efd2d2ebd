//! Error types for cost insights.

mod insight_error;

pub use insight_error::{InsightError, Result};
