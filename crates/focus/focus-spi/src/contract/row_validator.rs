//! Row validator trait definition.

use crate::model::RawBillingRow;

/// Schema gate for external cost data.
///
/// Implementations report every problem with a row instead of
/// stopping at the first or raising; an empty list means the row
/// satisfies the canonical contract. Validation never mutates or
/// coerces the row.
pub trait RowValidator: Send + Sync {
    /// Validate a single uploaded row, accumulating all failures.
    fn validate(&self, row: &RawBillingRow) -> Vec<String>;
}
