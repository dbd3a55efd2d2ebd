//! Ingestion and normalization configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Validation Configuration
// ============================================================================

/// Batch validation configuration.
///
/// `sample_size` caps how many leading rows of an uploaded batch are
/// validated before the batch is accepted or rejected. The cap is a
/// fixed number, never adaptive or time-based, so ingestion stays
/// deterministic; the trade-off is that a bad row past the sample is
/// caught at conversion rather than at the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Number of leading rows to validate (default: 50).
    pub sample_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { sample_size: 50 }
    }
}

impl ValidationConfig {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }
}

// ============================================================================
// Private Datacenter Inputs
// ============================================================================

/// Private datacenter cost parameters.
///
/// The entire external configuration surface of the normalizer; no
/// environment variables or files feed the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateDcInputs {
    /// Total hardware acquisition cost (capex).
    pub total_hardware_cost: f64,
    /// Straight-line amortization horizon in years. Must be positive.
    pub useful_life_years: f64,
    /// Recurring monthly power and cooling cost.
    pub monthly_power_cost: f64,
}

impl PrivateDcInputs {
    pub fn new(total_hardware_cost: f64, useful_life_years: f64, monthly_power_cost: f64) -> Self {
        Self {
            total_hardware_cost,
            useful_life_years,
            monthly_power_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_default_sample() {
        assert_eq!(ValidationConfig::default().sample_size, 50);
    }

    #[test]
    fn test_validation_config_custom_sample() {
        assert_eq!(ValidationConfig::new(10).sample_size, 10);
    }

    #[test]
    fn test_private_dc_inputs_fields() {
        let inputs = PrivateDcInputs::new(180_000.0, 5.0, 1_200.0);
        assert!((inputs.total_hardware_cost - 180_000.0).abs() < 1e-10);
        assert!((inputs.useful_life_years - 5.0).abs() < 1e-10);
        assert!((inputs.monthly_power_cost - 1_200.0).abs() < 1e-10);
    }
}
