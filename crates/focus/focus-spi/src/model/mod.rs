//! Data models for the canonical cost schema.
//!
//! This module contains the record types shared by every consumer of
//! normalized cost data.

mod record;
mod row;

pub use record::{
    CanonicalRecord, CATEGORY_COMPUTE, CATEGORY_SUPPORT, PRIVATE_DC_PROVIDER, PRIVATE_DC_REGION,
};
pub use row::RawBillingRow;
