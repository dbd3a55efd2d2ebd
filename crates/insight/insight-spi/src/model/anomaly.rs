//! Anomaly types.

use serde::{Deserialize, Serialize};

/// Severity of a detected cost anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Medium,
    High,
}

impl std::fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalySeverity::Medium => write!(f, "medium"),
            AnomalySeverity::High => write!(f, "high"),
        }
    }
}

/// A detected cost spike.
///
/// Derived from a record set, never persisted; `subject_id` is the
/// position of the offending record in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Index of the offending record in the scanned set.
    pub subject_id: usize,
    pub severity: AnomalySeverity,
    /// Short headline naming the offending service.
    pub title: String,
    /// Human-readable message naming the record's cost and the
    /// baseline mean, rounded to whole currency units.
    pub message: String,
    /// Effective cost of the offending record.
    pub cost: f64,
}
