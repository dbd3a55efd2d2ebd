//! Cost Forecasting Service Provider Interface
//!
//! Defines traits and types for projecting future cost from an
//! ordered history.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::CostForecaster;
pub use error::{ForecastError, Result};
pub use model::{CostForecast, CostHistoryPoint, ProjectedPoint, Trend};
