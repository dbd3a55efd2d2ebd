//! Executive summary generation.
//!
//! Turns normalized record sets into ranked narrative insight
//! strings for the reporting surface.

use focus_spi::model::{CATEGORY_COMPUTE, CATEGORY_SUPPORT};
use focus_spi::CanonicalRecord;
use insight_api::SummaryConfig;
use insight_spi::ExecutiveSummarizer;

/// Narrative summary generator.
#[derive(Debug, Clone, Default)]
pub struct SummaryGenerator {
    config: SummaryConfig,
}

impl SummaryGenerator {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }
}

impl ExecutiveSummarizer for SummaryGenerator {
    fn summarize(
        &self,
        private_records: &[CanonicalRecord],
        public_records: &[CanonicalRecord],
    ) -> Vec<String> {
        generate_executive_summary_with(private_records, public_records, &self.config)
    }
}

/// Generate the executive summary with default tuning.
pub fn generate_executive_summary(
    private_records: &[CanonicalRecord],
    public_records: &[CanonicalRecord],
) -> Vec<String> {
    generate_executive_summary_with(private_records, public_records, &SummaryConfig::default())
}

/// Generate ranked narrative insights over the record sets.
///
/// Emits a total-spend statement, a compute share-of-total statement
/// (or a neutral line when there is no spend to take a share of), and
/// an overhead-health statement comparing summed Support overhead
/// against the configured fraction of compute spend.
///
/// `public_records` is accepted for upcoming cross-cloud comparison
/// insights; no current statement reads it.
pub fn generate_executive_summary_with(
    private_records: &[CanonicalRecord],
    public_records: &[CanonicalRecord],
    config: &SummaryConfig,
) -> Vec<String> {
    let _ = public_records;

    let total_private = CanonicalRecord::total_effective_cost(private_records);
    let compute_cost = CanonicalRecord::category_effective_cost(private_records, CATEGORY_COMPUTE);
    let overhead = CanonicalRecord::category_effective_cost(private_records, CATEGORY_SUPPORT);

    let mut insights = vec![format!(
        "Current private datacenter spend is projected at ${:.2}/month.",
        total_private
    )];

    if total_private > 0.0 {
        insights.push(format!(
            "Compute infrastructure accounts for {:.0}% of total OPEX.",
            compute_cost / total_private * 100.0
        ));
    } else {
        insights.push("No private datacenter spend recorded for this period.".to_string());
    }

    if overhead > config.overhead_warning_ratio * compute_cost && overhead > 0.0 {
        // overhead > 0 implies total_private > 0 here.
        insights.push(format!(
            "Overhead costs (Power/Cooling) are high ({:.0}% of spend). \
             Improving PUE could save an estimated ${:.0}/mo.",
            overhead / total_private * 100.0,
            overhead * config.efficiency_gain
        ));
    } else {
        insights.push("Efficiency is healthy. Overhead is effectively managed.".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, effective_cost: f64) -> CanonicalRecord {
        CanonicalRecord {
            provider_name: "PrivateDC".to_string(),
            region_name: "On-Prem".to_string(),
            service_category: category.to_string(),
            service_name: "Test".to_string(),
            resource_name: None,
            billing_period_start: "2024-01-01".to_string(),
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
    fn test_healthy_overhead() {
        let records = vec![
            record(CATEGORY_COMPUTE, 3000.0),
            record(CATEGORY_SUPPORT, 500.0),
        ];
        let insights = generate_executive_summary(&records, &[]);

        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("$3500.00/month"));
        assert!(insights[1].contains("86% of total OPEX"));
        assert!(insights[2].contains("Efficiency is healthy"));
    }

    #[test]
    fn test_high_overhead_warning_with_savings() {
        let records = vec![
            record(CATEGORY_COMPUTE, 1000.0),
            record(CATEGORY_SUPPORT, 600.0),
        ];
        let insights = generate_executive_summary(&records, &[]);

        // 600 > 0.4 * 1000, overhead is 38% of the 1600 total, and a
        // 10% efficiency gain recovers $60.
        assert!(insights[2].contains("are high (38% of spend)"));
        assert!(insights[2].contains("$60/mo"));
    }

    #[test]
    fn test_overhead_summed_across_records() {
        let records = vec![
            record(CATEGORY_COMPUTE, 1000.0),
            record(CATEGORY_SUPPORT, 250.0),
            record(CATEGORY_SUPPORT, 250.0),
        ];
        let insights = generate_executive_summary(&records, &[]);
        assert!(insights[2].contains("are high"), "summed overhead should trip the 0.4 ratio");
    }

    #[test]
    fn test_zero_total_never_divides_by_zero() {
        let records = vec![record(CATEGORY_COMPUTE, 0.0), record(CATEGORY_SUPPORT, 0.0)];
        let insights = generate_executive_summary(&records, &[]);

        assert!(insights.len() >= 2);
        assert!(insights[1].contains("No private datacenter spend"));
        for insight in &insights {
            assert!(!insight.contains("NaN"));
            assert!(!insight.contains("inf"));
        }
    }

    #[test]
    fn test_empty_private_records() {
        let insights = generate_executive_summary(&[], &[]);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("$0.00/month"));
    }

    #[test]
    fn test_public_records_do_not_change_output() {
        let private = vec![record(CATEGORY_COMPUTE, 2000.0)];
        let with_public = generate_executive_summary(&private, &[record("Storage", 900.0)]);
        let without_public = generate_executive_summary(&private, &[]);
        assert_eq!(with_public, without_public);
    }

    #[test]
    fn test_custom_ratio_changes_verdict() {
        let records = vec![
            record(CATEGORY_COMPUTE, 1000.0),
            record(CATEGORY_SUPPORT, 600.0),
        ];
        let strict = generate_executive_summary_with(&records, &[], &SummaryConfig::new(0.7, 0.1));
        assert!(strict[2].contains("Efficiency is healthy"));
    }
}
