//! Error types for the canonical cost schema.
//!
//! This module contains error types and the Result alias.

mod focus_error;

pub use focus_error::{FocusError, Result};
