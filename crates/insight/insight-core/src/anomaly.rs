//! Statistical cost-spike detection.
//!
//! Flags records whose effective cost sits far above the mean of the
//! record set. The set is the entire observed population for the
//! billing period, not a sample, so the population standard deviation
//! is used.

use focus_spi::CanonicalRecord;
use insight_api::AnomalyConfig;
use insight_spi::{Anomaly, AnomalySeverity, CostAnomalyDetector, InsightError, Result};

/// Z-score cost-spike detector.
#[derive(Debug, Clone)]
pub struct SpikeDetector {
    config: AnomalyConfig,
}

impl SpikeDetector {
    /// Create a detector, checking the thresholds are usable.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive spike threshold or a
    /// high-severity threshold below the spike threshold.
    pub fn new(config: AnomalyConfig) -> Result<Self> {
        if config.spike_sigma <= 0.0 {
            return Err(InsightError::InvalidParameter {
                name: "spike_sigma".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if config.high_severity_sigma < config.spike_sigma {
            return Err(InsightError::InvalidParameter {
                name: "high_severity_sigma".to_string(),
                reason: "must be at least spike_sigma".to_string(),
            });
        }
        Ok(Self { config })
    }
}

impl Default for SpikeDetector {
    fn default() -> Self {
        Self {
            config: AnomalyConfig::default(),
        }
    }
}

impl CostAnomalyDetector for SpikeDetector {
    fn detect(&self, records: &[CanonicalRecord]) -> Vec<Anomaly> {
        detect_anomalies_with(records, &self.config)
    }
}

/// Detect cost spikes with the default thresholds.
pub fn detect_anomalies(records: &[CanonicalRecord]) -> Vec<Anomaly> {
    detect_anomalies_with(records, &AnomalyConfig::default())
}

/// Detect cost spikes with explicit thresholds.
///
/// Fewer than two records means no meaningful deviation is
/// measurable, so the result is empty rather than an error. A uniform
/// set has zero deviation and yields no anomalies. Output order
/// follows input order.
pub fn detect_anomalies_with(records: &[CanonicalRecord], config: &AnomalyConfig) -> Vec<Anomaly> {
    if records.len() < 2 {
        return Vec::new();
    }

    let n = records.len() as f64;
    let mean = records.iter().map(|r| r.effective_cost).sum::<f64>() / n;
    let std_dev = (records
        .iter()
        .map(|r| (r.effective_cost - mean).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();

    let spike_cutoff = mean + config.spike_sigma * std_dev;
    let high_cutoff = mean + config.high_severity_sigma * std_dev;

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.effective_cost > spike_cutoff)
        .map(|(i, r)| {
            let severity = if r.effective_cost > high_cutoff {
                AnomalySeverity::High
            } else {
                AnomalySeverity::Medium
            };
            Anomaly {
                subject_id: i,
                severity,
                title: format!("Cost Spike Detected: {}", r.service_name),
                message: format!(
                    "{} cost (${:.0}) is significantly higher than the average (${:.0}).",
                    r.service_name, r.effective_cost, mean
                ),
                cost: r.effective_cost,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str, effective_cost: f64) -> CanonicalRecord {
        CanonicalRecord {
            provider_name: "AWS".to_string(),
            region_name: "us-east-1".to_string(),
            service_category: "Compute".to_string(),
            service_name: service.to_string(),
            resource_name: None,
            billing_period_start: "2024-01-01".to_string(),
            billing_period_end: None,
            charge_category: "Usage".to_string(),
            billed_cost: effective_cost,
            effective_cost,
            pricing_quantity: 1.0,
            pricing_unit: "Month".to_string(),
            allocated_method_details: None,
            contract_commitment_id: None,
        }
    }

    fn costs(values: &[f64]) -> Vec<CanonicalRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| record(&format!("Service-{i}"), v))
            .collect()
    }

    #[test]
    fn test_flags_single_spike() {
        let anomalies = detect_anomalies(&costs(&[100.0, 100.0, 100.0, 1000.0]));
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].subject_id, 3);
        assert!((anomalies[0].cost - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_spike_severity_follows_thresholds() {
        // mean 325, population std dev ~389.7: 1000 sits ~1.73 sigma
        // above the mean, past the 1.5 flag cutoff but under the 2.5
        // high cutoff.
        let anomalies = detect_anomalies(&costs(&[100.0, 100.0, 100.0, 1000.0]));
        assert_eq!(anomalies[0].severity, AnomalySeverity::Medium);

        // mean 190, std dev 270: 1000 sits 3 sigma above the mean.
        let anomalies = detect_anomalies(&costs(&[
            100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 1000.0,
        ]));
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, AnomalySeverity::High);
    }

    #[test]
    fn test_message_names_cost_and_mean() {
        let anomalies = detect_anomalies(&costs(&[100.0, 100.0, 100.0, 1000.0]));
        assert_eq!(anomalies[0].title, "Cost Spike Detected: Service-3");
        assert!(anomalies[0].message.contains("$1000"));
        assert!(anomalies[0].message.contains("$325"));
    }

    #[test]
    fn test_too_few_records_is_empty() {
        assert!(detect_anomalies(&costs(&[1000.0])).is_empty());
        assert!(detect_anomalies(&[]).is_empty());
    }

    #[test]
    fn test_uniform_costs_yield_no_anomalies() {
        assert!(detect_anomalies(&costs(&[100.0; 8])).is_empty());
        assert!(detect_anomalies(&costs(&[0.0; 4])).is_empty());
    }

    #[test]
    fn test_output_follows_input_order() {
        let anomalies = detect_anomalies_with(
            &costs(&[1000.0, 100.0, 100.0, 100.0, 990.0, 100.0]),
            &AnomalyConfig::new(0.5, 2.5),
        );
        let ids: Vec<usize> = anomalies.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![0, 4]);
    }

    #[test]
    fn test_detector_rejects_bad_thresholds() {
        assert!(SpikeDetector::new(AnomalyConfig::new(0.0, 2.5)).is_err());
        assert!(SpikeDetector::new(AnomalyConfig::new(2.0, 1.0)).is_err());
        assert!(SpikeDetector::new(AnomalyConfig::default()).is_ok());
    }

    #[test]
    fn test_trait_object_usable() {
        let detector: Box<dyn CostAnomalyDetector> = Box::new(SpikeDetector::default());
        assert_eq!(detector.detect(&costs(&[100.0, 100.0, 100.0, 1000.0])).len(), 1);
    }
}
