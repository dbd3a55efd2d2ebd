//! Cost forecaster trait definition.

use crate::error::Result;
use crate::model::{CostForecast, CostHistoryPoint};

/// Cost forecaster trait.
///
/// Implementations fit a model to an ordered cost history and project
/// `horizon` future points.
pub trait CostForecaster: Send + Sync {
    /// Fit to `history` and project `horizon` future steps.
    fn forecast(&self, history: &[CostHistoryPoint], horizon: usize) -> Result<CostForecast>;
}
