//! Sample-gated batch ingestion.
//!
//! The in-process boundary through which uploaded cost exports enter
//! the canonical model.

use std::collections::HashSet;

use focus_api::ValidationConfig;
use focus_spi::{CanonicalRecord, FocusError, RawBillingRow, Result};

use crate::validator::{canonicalize_row, validate_row};

/// Outcome of ingesting one uploaded batch.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Canonical records accepted from the batch.
    pub records: Vec<CanonicalRecord>,
    /// Total rows in the uploaded batch.
    pub total_rows: usize,
    /// Distinct service names across accepted records.
    pub distinct_services: usize,
    /// Rows past the validation sample that still failed conversion
    /// and were dropped.
    pub skipped_rows: usize,
}

/// Ingest an uploaded batch through the bounded validation sample.
///
/// The first `config.sample_size` rows are validated; any failure
/// rejects the whole batch with one `Row N: ...` message per failing
/// row. On a clean sample every row is canonicalized individually,
/// and rows beyond the sample that fail conversion are dropped and
/// counted rather than entering the record set.
///
/// # Errors
///
/// `BatchRejected` carrying the per-row messages for the sample.
pub fn ingest_rows(rows: &[RawBillingRow], config: &ValidationConfig) -> Result<IngestReport> {
    let sample_len = rows.len().min(config.sample_size);

    let mut errors = Vec::new();
    for (i, row) in rows[..sample_len].iter().enumerate() {
        let row_errors = validate_row(row);
        if !row_errors.is_empty() {
            errors.push(format!("Row {}: {}", i + 1, row_errors.join(", ")));
        }
    }
    if !errors.is_empty() {
        return Err(FocusError::BatchRejected { errors });
    }

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;
    for row in rows {
        match canonicalize_row(row) {
            Ok(record) => records.push(record),
            Err(_) => skipped_rows += 1,
        }
    }

    let distinct_services = records
        .iter()
        .map(|r| r.service_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(IngestReport {
        records,
        total_rows: rows.len(),
        distinct_services,
        skipped_rows,
    })
}
