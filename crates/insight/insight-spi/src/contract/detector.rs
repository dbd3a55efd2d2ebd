//! Anomaly detector trait definition.

use focus_spi::CanonicalRecord;

use crate::model::Anomaly;

/// Cost anomaly detector trait.
///
/// Implementations flag statistical outliers by effective cost.
/// Too few records is a valid, empty result, not an error; output
/// order follows input order.
pub trait CostAnomalyDetector: Send + Sync {
    /// Scan a record set for cost anomalies.
    fn detect(&self, records: &[CanonicalRecord]) -> Vec<Anomaly>;
}
