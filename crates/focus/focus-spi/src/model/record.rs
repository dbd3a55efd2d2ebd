//! Canonical billing record type.

use serde::{Deserialize, Serialize};

/// Provider name stamped on records synthesized by the normalizer.
pub const PRIVATE_DC_PROVIDER: &str = "PrivateDC";

/// Region name stamped on records synthesized by the normalizer.
pub const PRIVATE_DC_REGION: &str = "On-Prem";

/// Service category for compute line items.
pub const CATEGORY_COMPUTE: &str = "Compute";

/// Service category for overhead line items (power, cooling).
pub const CATEGORY_SUPPORT: &str = "Support";

/// One normalized billing line item.
///
/// Immutable value object; a new configuration or upload produces a
/// wholly new record set, never a mutation. Every record in
/// circulation has passed the validation gate, so `effective_cost` is
/// a finite non-negative number and the period bounds are ordered.
///
/// Serialized field names are the FOCUS column names (`ProviderName`,
/// `EffectiveCost`, ...), so records round-trip against standard cost
/// and usage exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalRecord {
    /// Source identity, e.g. "AWS" or "PrivateDC".
    pub provider_name: String,
    pub region_name: String,
    /// Coarse classification, e.g. "Compute" or "Support".
    pub service_category: String,
    pub service_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// ISO-8601 period start.
    pub billing_period_start: String,
    /// ISO-8601 period end, never before the start when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_end: Option<String>,
    /// Charge classification, e.g. "Usage" or "Purchase".
    pub charge_category: String,
    /// Nominal invoiced amount; legitimately 0 for owned-asset usage.
    pub billed_cost: f64,
    /// Amortized/blended cost. The single field every downstream
    /// analytic reads.
    pub effective_cost: f64,
    pub pricing_quantity: f64,
    pub pricing_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_method_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_commitment_id: Option<String>,
}

impl CanonicalRecord {
    /// Sum of effective cost over a record set.
    pub fn total_effective_cost(records: &[CanonicalRecord]) -> f64 {
        // Seed with 0.0: the empty-iterator identity of `Sum<f64>` is
        // -0.0, which would render as "-0.00".
        records.iter().map(|r| r.effective_cost).fold(0.0, |acc, c| acc + c)
    }

    /// Sum of effective cost over records in one service category.
    pub fn category_effective_cost(records: &[CanonicalRecord], category: &str) -> f64 {
        records
            .iter()
            .filter(|r| r.service_category == category)
            .map(|r| r.effective_cost)
            .fold(0.0, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, effective_cost: f64) -> CanonicalRecord {
        CanonicalRecord {
            provider_name: PRIVATE_DC_PROVIDER.to_string(),
            region_name: PRIVATE_DC_REGION.to_string(),
            service_category: category.to_string(),
            service_name: "Test".to_string(),
            resource_name: None,
            billing_period_start: "2024-01-01T00:00:00Z".to_string(),
            billing_period_end: None,
            charge_category: "Usage".to_string(),
            billed_cost: 0.0,
            effective_cost,
            pricing_quantity: 1.0,
            pricing_unit: "Month".to_string(),
            allocated_method_details: None,
            contract_commitment_id: None,
        }
    }

    #[test]
    fn test_total_effective_cost() {
        let records = vec![record(CATEGORY_COMPUTE, 100.0), record(CATEGORY_SUPPORT, 50.0)];
        assert!((CanonicalRecord::total_effective_cost(&records) - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_effective_cost_empty() {
        assert_eq!(CanonicalRecord::total_effective_cost(&[]), 0.0);
    }

    #[test]
    fn test_category_effective_cost_filters() {
        let records = vec![
            record(CATEGORY_COMPUTE, 100.0),
            record(CATEGORY_SUPPORT, 50.0),
            record(CATEGORY_COMPUTE, 25.0),
        ];
        let compute = CanonicalRecord::category_effective_cost(&records, CATEGORY_COMPUTE);
        assert!((compute - 125.0).abs() < 1e-10);
    }

    #[test]
    fn test_serializes_focus_column_names() {
        let json = serde_json::to_string(&record(CATEGORY_COMPUTE, 42.0)).unwrap();
        assert!(json.contains("\"ProviderName\""));
        assert!(json.contains("\"EffectiveCost\""));
        assert!(json.contains("\"BillingPeriodStart\""));
        // Absent optionals are omitted entirely
        assert!(!json.contains("ResourceName"));
    }
}
