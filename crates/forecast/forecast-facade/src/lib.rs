//! Forecast Facade
//!
//! Unified re-exports for cost trend forecasting.
//!
//! This facade provides a single entry point to the forecast stack:
//! - `CostForecaster` trait and result/history models from SPI
//! - `ForecastConfig` from API
//! - `LinearTrendForecaster` and the `predict` helper from Core

// Re-export everything from SPI
pub use forecast_spi::*;

// Re-export everything from API
pub use forecast_api::*;

// Re-export everything from Core
pub use forecast_core::*;
