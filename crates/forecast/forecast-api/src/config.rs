//! Forecasting configuration types.

use serde::{Deserialize, Serialize};

/// Trend projection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of future periods to project (default: 6).
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { horizon: 6 }
    }
}

impl ForecastConfig {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_horizon() {
        assert_eq!(ForecastConfig::default().horizon, 6);
    }

    #[test]
    fn test_custom_horizon() {
        assert_eq!(ForecastConfig::new(12).horizon, 12);
    }
}
