//! # insight-core
//!
//! Statistical cost-spike detection and executive summary generation
//! over canonical cost records.

mod anomaly;
mod summary;

pub use anomaly::{detect_anomalies, detect_anomalies_with, SpikeDetector};
pub use summary::{generate_executive_summary, generate_executive_summary_with, SummaryGenerator};
