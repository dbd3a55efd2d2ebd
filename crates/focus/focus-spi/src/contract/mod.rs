//! Contract definitions for the canonical cost schema.
//!
//! This module contains trait definitions that providers must implement.

mod row_validator;

pub use row_validator::RowValidator;
