//! FOCUS Normalization API
//!
//! Configuration types for validation sampling and private datacenter
//! normalization.

mod config;

pub use config::{PrivateDcInputs, ValidationConfig};

// Re-export SPI types
pub use focus_spi::{CanonicalRecord, FocusError, RawBillingRow, Result, RowValidator};
