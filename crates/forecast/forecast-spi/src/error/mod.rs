//! Error types for cost forecasting.

mod forecast_error;

pub use forecast_error::{ForecastError, Result};
