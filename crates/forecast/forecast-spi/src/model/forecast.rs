//! Forecast result types.

use serde::{Deserialize, Serialize};

/// Direction of the fitted trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// A single projected future point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Time index on the same axis as the history, which ends at
    /// index `n - 1`.
    pub index: usize,
    /// Projected cost, clamped at zero.
    pub predicted_cost: f64,
    /// Direction of the fitted line.
    pub trend: Trend,
}

/// Result of a linear trend fit and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostForecast {
    /// Fitted trend per time step.
    pub slope: f64,
    /// Fitted cost at index zero.
    pub intercept: f64,
    /// Projections for each future step, in order.
    pub projections: Vec<ProjectedPoint>,
}

impl CostForecast {
    /// Cost projected at the final step of the horizon.
    pub fn final_projected_cost(&self) -> Option<f64> {
        self.projections.last().map(|p| p.predicted_cost)
    }

    /// Direction of the fitted line.
    pub fn trend(&self) -> Trend {
        if self.slope > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }
}
