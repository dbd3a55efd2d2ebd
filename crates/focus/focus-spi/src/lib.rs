//! FOCUS Canonical Model Service Provider Interface
//!
//! Defines the canonical billing record, the raw upload row shape,
//! and the row validation contract.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RowValidator;
pub use error::{FocusError, Result};
pub use model::{CanonicalRecord, RawBillingRow};
