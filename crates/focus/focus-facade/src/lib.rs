//! FOCUS Facade
//!
//! Unified re-exports for the canonical cost model.
//!
//! This facade provides a single entry point to the schema stack:
//! - `CanonicalRecord`, `RawBillingRow` and the `RowValidator` trait from SPI
//! - `ValidationConfig` and `PrivateDcInputs` from API
//! - Validation, normalization and ingestion from Core

// Re-export everything from SPI
pub use focus_spi::*;

// Re-export everything from API
pub use focus_api::*;

// Re-export everything from Core
pub use focus_core::*;
