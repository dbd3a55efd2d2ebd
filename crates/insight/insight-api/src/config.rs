//! Insight configuration types.
//!
//! The thresholds here are tunable constants with documented
//! defaults, not hardcoded literals, so they can be adjusted without
//! code changes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Anomaly Configuration
// ============================================================================

/// Cost-spike detection thresholds, in population standard deviations
/// above the mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Flag a record above `mean + spike_sigma * std_dev` (default: 1.5).
    pub spike_sigma: f64,
    /// Escalate to high severity above `mean + high_severity_sigma * std_dev`
    /// (default: 2.5).
    pub high_severity_sigma: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            spike_sigma: 1.5,
            high_severity_sigma: 2.5,
        }
    }
}

impl AnomalyConfig {
    pub fn new(spike_sigma: f64, high_severity_sigma: f64) -> Self {
        Self {
            spike_sigma,
            high_severity_sigma,
        }
    }
}

// ============================================================================
// Summary Configuration
// ============================================================================

/// Executive summary tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Warn when overhead exceeds this fraction of compute spend
    /// (default: 0.4).
    pub overhead_warning_ratio: f64,
    /// Fraction of overhead assumed recoverable by efficiency work,
    /// used for the estimated-savings figure (default: 0.1).
    pub efficiency_gain: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            overhead_warning_ratio: 0.4,
            efficiency_gain: 0.1,
        }
    }
}

impl SummaryConfig {
    pub fn new(overhead_warning_ratio: f64, efficiency_gain: f64) -> Self {
        Self {
            overhead_warning_ratio,
            efficiency_gain,
        }
    }
}
