//! # forecast-core
//!
//! Ordinary least squares trend forecasting for cost histories.

mod linear;

pub use linear::{predict, LinearTrendForecaster};
