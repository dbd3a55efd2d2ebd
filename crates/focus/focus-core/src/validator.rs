//! FOCUS row validation and canonicalization.

use focus_spi::{CanonicalRecord, FocusError, RawBillingRow, Result, RowValidator};

/// Placeholder for dimension columns an export did not carry.
///
/// Only display-oriented dimensions are ever defaulted; the analytic
/// fields (provider, period start, effective cost) are enforced by
/// [`validate_row`] and never filled in.
pub const UNKNOWN_FIELD: &str = "Unknown";

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn parse_number(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(|v| v.trim().parse::<f64>().ok())
}

/// Validate a single uploaded row against the canonical contract.
///
/// Runs every check and accumulates all failures so a caller can
/// report every problem in one pass. Total over arbitrary malformed
/// rows; never mutates or coerces. An empty list means the row is
/// valid.
pub fn validate_row(row: &RawBillingRow) -> Vec<String> {
    let mut errors = Vec::new();

    if !present(&row.provider_name) {
        errors.push("Missing ProviderName".to_string());
    }
    if !present(&row.billing_period_start) {
        errors.push("Missing BillingPeriodStart".to_string());
    }

    if !parse_number(&row.effective_cost).is_some_and(f64::is_finite) {
        errors.push("EffectiveCost must be a valid number".to_string());
    }

    // ISO-8601 period bounds order lexicographically.
    if let (Some(start), Some(end)) = (
        row.billing_period_start.as_deref(),
        row.billing_period_end.as_deref(),
    ) {
        if !start.is_empty() && !end.is_empty() && end < start {
            errors.push("BillingPeriodEnd cannot be before BillingPeriodStart".to_string());
        }
    }

    errors
}

/// Default [`RowValidator`] implementation over [`validate_row`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusValidator;

impl RowValidator for FocusValidator {
    fn validate(&self, row: &RawBillingRow) -> Vec<String> {
        validate_row(row)
    }
}

/// Convert a validated row into a [`CanonicalRecord`].
///
/// The single entry point from external data into the canonical
/// model. On top of [`validate_row`] this rejects a negative
/// effective cost, so every record it returns satisfies the invariant
/// the downstream analytics rely on. Dimension columns the export did
/// not carry default to [`UNKNOWN_FIELD`]; absent numeric metadata
/// defaults to zero.
///
/// # Errors
///
/// `InvalidRow` carrying every accumulated validation message.
pub fn canonicalize_row(row: &RawBillingRow) -> Result<CanonicalRecord> {
    let mut errors = validate_row(row);

    let effective_cost = parse_number(&row.effective_cost).unwrap_or(f64::NAN);
    if effective_cost.is_finite() && effective_cost < 0.0 {
        errors.push("EffectiveCost cannot be negative".to_string());
    }

    if !errors.is_empty() {
        return Err(FocusError::InvalidRow { errors });
    }

    let text = |value: &Option<String>| {
        value
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
    };
    let optional = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

    Ok(CanonicalRecord {
        provider_name: text(&row.provider_name),
        region_name: text(&row.region_name),
        service_category: text(&row.service_category),
        service_name: text(&row.service_name),
        resource_name: optional(&row.resource_name),
        billing_period_start: row.billing_period_start.clone().unwrap_or_default(),
        billing_period_end: optional(&row.billing_period_end),
        charge_category: text(&row.charge_category),
        billed_cost: parse_number(&row.billed_cost).unwrap_or(0.0),
        effective_cost,
        pricing_quantity: parse_number(&row.pricing_quantity).unwrap_or(0.0),
        pricing_unit: text(&row.pricing_unit),
        allocated_method_details: optional(&row.allocated_method_details),
        contract_commitment_id: optional(&row.contract_commitment_id),
    })
}
