//! Data models for cost insights.

mod anomaly;

pub use anomaly::{Anomaly, AnomalySeverity};
