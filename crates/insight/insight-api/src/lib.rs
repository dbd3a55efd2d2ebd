//! Cost Insight API
//!
//! Configuration types for anomaly detection and executive summaries.

mod config;

pub use config::{AnomalyConfig, SummaryConfig};

// Re-export SPI types
pub use insight_spi::{
    Anomaly, AnomalySeverity, CostAnomalyDetector, ExecutiveSummarizer, InsightError, Result,
};
