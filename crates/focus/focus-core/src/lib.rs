//! # focus-core
//!
//! Canonical model implementations: row validation and
//! canonicalization, private datacenter normalization, and the
//! sample-gated batch ingestion boundary.
//!
//! Everything here is a pure, synchronous function over immutable
//! inputs; same inputs give same outputs (the normalizer's billing
//! stamp aside) with no observable side effects beyond the returned
//! value.

mod ingest;
mod normalizer;
mod validator;

pub use ingest::{ingest_rows, IngestReport};
pub use normalizer::normalize_private_dc;
pub use validator::{canonicalize_row, validate_row, FocusValidator, UNKNOWN_FIELD};
