//! Raw upload row type.

use serde::{Deserialize, Serialize};

/// One uploaded row before the schema gate.
///
/// Every field is optional and untyped text: the shape mirrors
/// whatever columns a cost export happened to carry. The validator in
/// `focus-core` is the single path from this type into
/// [`CanonicalRecord`](crate::model::CanonicalRecord); nothing else
/// may read raw rows.
///
/// Field names deserialize from the FOCUS column headers, so a CSV
/// reader can produce rows directly. Columns missing from the export
/// come through as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawBillingRow {
    pub provider_name: Option<String>,
    pub region_name: Option<String>,
    pub service_category: Option<String>,
    pub service_name: Option<String>,
    pub resource_name: Option<String>,
    pub billing_period_start: Option<String>,
    pub billing_period_end: Option<String>,
    pub charge_category: Option<String>,
    pub billed_cost: Option<String>,
    pub effective_cost: Option<String>,
    pub pricing_quantity: Option<String>,
    pub pricing_unit: Option<String>,
    pub allocated_method_details: Option<String>,
    pub contract_commitment_id: Option<String>,
}
