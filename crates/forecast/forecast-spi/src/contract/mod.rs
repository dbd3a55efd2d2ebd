//! Contract definitions for cost forecasting.

mod cost_forecaster;

pub use cost_forecaster::CostForecaster;
