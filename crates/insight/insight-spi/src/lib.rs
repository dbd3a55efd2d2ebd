//! Cost Insight Service Provider Interface
//!
//! Defines traits and types for anomaly detection and narrative
//! summaries over canonical cost records.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CostAnomalyDetector, ExecutiveSummarizer};
pub use error::{InsightError, Result};
pub use model::{Anomaly, AnomalySeverity};
