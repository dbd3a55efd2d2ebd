//! Cost history types.

use serde::{Deserialize, Serialize};

/// One observed point of cost history.
///
/// Order within a history slice is chronological and significant:
/// the forecaster fits against the zero-based position, not the
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostHistoryPoint {
    /// Display label for the period, e.g. "Jan" or "2024-03".
    pub period_label: String,
    /// Observed cost for the period.
    pub cost: f64,
}

impl CostHistoryPoint {
    /// Create a new history point.
    pub fn new(period_label: impl Into<String>, cost: f64) -> Self {
        Self {
            period_label: period_label.into(),
            cost,
        }
    }
}
