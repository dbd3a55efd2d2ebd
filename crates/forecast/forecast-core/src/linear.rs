//! Linear trend forecasting.
//!
//! Fits `cost = intercept + slope * t` against the zero-based history
//! index using ordinary least squares, then projects the line
//! forward. Negative projections are clamped to zero; cost cannot be
//! negative, and a steep downward trend must not predict negative
//! spend.

use forecast_api::ForecastConfig;
use forecast_spi::{
    CostForecast, CostForecaster, CostHistoryPoint, ForecastError, ProjectedPoint, Result, Trend,
};

/// Linear trend forecaster.
///
/// # Example
///
/// ```rust
/// use forecast_core::predict;
/// use forecast_spi::CostHistoryPoint;
///
/// let history = vec![
///     CostHistoryPoint::new("Jan", 100.0),
///     CostHistoryPoint::new("Feb", 110.0),
///     CostHistoryPoint::new("Mar", 120.0),
/// ];
/// let forecast = predict(&history, 2).unwrap();
/// assert!((forecast.slope - 10.0).abs() < 1e-10);
/// assert!((forecast.projections[0].predicted_cost - 130.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearTrendForecaster {
    config: ForecastConfig,
}

impl LinearTrendForecaster {
    /// Create a forecaster with the given configuration.
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Forecast over the configured horizon.
    pub fn forecast_configured(&self, history: &[CostHistoryPoint]) -> Result<CostForecast> {
        predict(history, self.config.horizon)
    }
}

impl CostForecaster for LinearTrendForecaster {
    fn forecast(&self, history: &[CostHistoryPoint], horizon: usize) -> Result<CostForecast> {
        predict(history, horizon)
    }
}

/// Fit a least-squares line to `history` and project `horizon` steps.
///
/// Future steps sit at indices `(n - 1) + 1 ..= (n - 1) + horizon` on
/// the same axis as the history.
///
/// # Errors
///
/// `InsufficientData` for fewer than two points (a line cannot be fit
/// to one observation); `InvalidParameter` for a zero horizon.
pub fn predict(history: &[CostHistoryPoint], horizon: usize) -> Result<CostForecast> {
    if history.len() < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: history.len(),
        });
    }
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter {
            name: "horizon".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let n = history.len() as f64;

    // Time indices: 0, 1, 2, ...
    let sum_t: f64 = (0..history.len()).map(|i| i as f64).sum();
    let sum_y: f64 = history.iter().map(|p| p.cost).sum();
    let sum_t2: f64 = (0..history.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = history
        .iter()
        .enumerate()
        .map(|(i, p)| i as f64 * p.cost)
        .sum();

    // OLS formulas; the denominator is positive for n >= 2 because
    // the indices are distinct.
    let slope = (n * sum_ty - sum_t * sum_y) / (n * sum_t2 - sum_t * sum_t);
    let intercept = (sum_y - slope * sum_t) / n;

    let trend = if slope > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    let last_index = history.len() - 1;
    let projections = (1..=horizon)
        .map(|step| {
            let index = last_index + step;
            let predicted = slope * index as f64 + intercept;
            ProjectedPoint {
                index,
                predicted_cost: predicted.max(0.0),
                trend,
            }
        })
        .collect();

    Ok(CostForecast {
        slope,
        intercept,
        projections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(costs: &[f64]) -> Vec<CostHistoryPoint> {
        costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| CostHistoryPoint::new(format!("M{}", i + 1), cost))
            .collect()
    }

    #[test]
    fn test_linear_history_fits_exactly() {
        let forecast = predict(&history(&[100.0, 110.0, 120.0]), 2).unwrap();

        assert!((forecast.slope - 10.0).abs() < 1e-10);
        assert!((forecast.intercept - 100.0).abs() < 1e-10);
        assert_eq!(forecast.projections.len(), 2);
        assert_eq!(forecast.projections[0].index, 3);
        assert!((forecast.projections[0].predicted_cost - 130.0).abs() < 1e-10);
        assert_eq!(forecast.projections[1].index, 4);
        assert!((forecast.projections[1].predicted_cost - 140.0).abs() < 1e-10);
        assert_eq!(forecast.projections[0].trend, Trend::Increasing);
    }

    #[test]
    fn test_constant_history_projects_flat() {
        let forecast = predict(&history(&[100.0, 100.0, 100.0, 100.0]), 3).unwrap();

        assert_eq!(forecast.slope, 0.0);
        for projection in &forecast.projections {
            assert!((projection.predicted_cost - 100.0).abs() < 1e-10);
            assert_eq!(projection.trend, Trend::Decreasing);
        }
    }

    #[test]
    fn test_insufficient_data() {
        let err = predict(&history(&[100.0]), 2).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientData { required: 2, actual: 1 }
        ));

        let err = predict(&[], 2).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientData { required: 2, actual: 0 }
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = predict(&history(&[100.0, 110.0]), 0).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { .. }));
    }

    #[test]
    fn test_negative_projection_clamped_to_zero() {
        // Falling by 50 per step from 100: the line goes negative at
        // index 2 onward.
        let forecast = predict(&history(&[100.0, 50.0]), 3).unwrap();

        assert!((forecast.slope + 50.0).abs() < 1e-10);
        assert_eq!(forecast.projections[0].predicted_cost, 0.0);
        assert_eq!(forecast.projections[2].predicted_cost, 0.0);
        assert_eq!(forecast.projections[0].trend, Trend::Decreasing);
    }

    #[test]
    fn test_noisy_history_trend_direction() {
        let forecast = predict(&history(&[90.0, 95.0, 92.0, 105.0, 98.0, 100.0]), 6).unwrap();
        assert!(forecast.slope > 0.0);
        assert_eq!(forecast.trend(), Trend::Increasing);
    }

    #[test]
    fn test_forecaster_uses_configured_horizon() {
        let forecaster = LinearTrendForecaster::new(forecast_api::ForecastConfig::new(4));
        let forecast = forecaster
            .forecast_configured(&history(&[100.0, 110.0, 120.0]))
            .unwrap();
        assert_eq!(forecast.projections.len(), 4);
    }

    #[test]
    fn test_trait_object_usable() {
        let forecaster: Box<dyn CostForecaster> = Box::new(LinearTrendForecaster::default());
        let forecast = forecaster.forecast(&history(&[10.0, 20.0]), 1).unwrap();
        assert_eq!(forecast.projections.len(), 1);
    }
}
