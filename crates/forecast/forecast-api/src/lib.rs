//! Cost Forecasting API
//!
//! Configuration types for trend projection.

mod config;

pub use config::ForecastConfig;

// Re-export SPI types
pub use forecast_spi::{
    CostForecast, CostForecaster, CostHistoryPoint, ForecastError, ProjectedPoint, Result, Trend,
};
