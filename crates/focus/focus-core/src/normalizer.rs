//! Private datacenter cost normalization.
//!
//! Converts the three datacenter parameters into canonical records
//! via straight-line amortization, so owned hardware becomes
//! economically comparable to cloud opex.

use chrono::Utc;
use focus_api::PrivateDcInputs;
use focus_spi::model::{CATEGORY_COMPUTE, CATEGORY_SUPPORT, PRIVATE_DC_PROVIDER, PRIVATE_DC_REGION};
use focus_spi::{CanonicalRecord, FocusError, Result};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Normalize private datacenter parameters into canonical records.
///
/// Produces exactly two records sharing one billing period stamp:
///
/// 1. Compute / "Dedicated Hardware": the capex is sunk, so
///    `billed_cost` is 0 and `effective_cost` carries the amortized
///    monthly hardware cost (`total_hardware_cost / (useful_life_years * 12)`).
/// 2. Support / "Power & Cooling": billed and effective at the same
///    monthly rate.
///
/// Records produced here always pass the row validator; a new call
/// produces a wholly new record set.
///
/// # Errors
///
/// `InvalidInput` when `useful_life_years` is not positive; the
/// amortization would otherwise divide by zero.
pub fn normalize_private_dc(inputs: &PrivateDcInputs) -> Result<Vec<CanonicalRecord>> {
    if inputs.useful_life_years <= 0.0 {
        return Err(FocusError::InvalidInput {
            name: "useful_life_years".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let monthly_hardware_cost =
        inputs.total_hardware_cost / (inputs.useful_life_years * MONTHS_PER_YEAR);
    let billing_period_start = Utc::now().to_rfc3339();

    Ok(vec![
        CanonicalRecord {
            provider_name: PRIVATE_DC_PROVIDER.to_string(),
            region_name: PRIVATE_DC_REGION.to_string(),
            service_category: CATEGORY_COMPUTE.to_string(),
            service_name: "Dedicated Hardware".to_string(),
            resource_name: None,
            billing_period_start: billing_period_start.clone(),
            billing_period_end: None,
            charge_category: "Usage".to_string(),
            // Capex already paid; only the amortized view is billed here.
            billed_cost: 0.0,
            effective_cost: monthly_hardware_cost,
            pricing_quantity: 1.0,
            pricing_unit: "Month".to_string(),
            allocated_method_details: Some("Hardware Depreciation (Amortized)".to_string()),
            contract_commitment_id: None,
        },
        CanonicalRecord {
            provider_name: PRIVATE_DC_PROVIDER.to_string(),
            region_name: PRIVATE_DC_REGION.to_string(),
            service_category: CATEGORY_SUPPORT.to_string(),
            service_name: "Power & Cooling".to_string(),
            resource_name: None,
            billing_period_start,
            billing_period_end: None,
            charge_category: "Usage".to_string(),
            billed_cost: inputs.monthly_power_cost,
            effective_cost: inputs.monthly_power_cost,
            pricing_quantity: 1.0,
            pricing_unit: "Month".to_string(),
            allocated_method_details: None,
            contract_commitment_id: None,
        },
    ])
}
