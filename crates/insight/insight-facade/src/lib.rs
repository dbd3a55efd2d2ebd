//! Insight Facade
//!
//! Unified re-exports for cost insights.
//!
//! This facade provides a single entry point to the insight stack:
//! - `CostAnomalyDetector` / `ExecutiveSummarizer` traits and the
//!   `Anomaly` model from SPI
//! - `AnomalyConfig` and `SummaryConfig` from API
//! - `SpikeDetector`, `SummaryGenerator` and the free helpers from Core

// Re-export everything from SPI
pub use insight_spi::*;

// Re-export everything from API
pub use insight_api::*;

// Re-export everything from Core
pub use insight_core::*;
