//! Data models for cost forecasting.

mod forecast;
mod history;

pub use forecast::{CostForecast, ProjectedPoint, Trend};
pub use history::CostHistoryPoint;
