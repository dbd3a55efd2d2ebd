//! # costful
//!
//! Cost normalization and intelligence engine. Normalizes private
//! datacenter parameters and public cloud cost exports into one
//! canonical billing schema, then layers analytics on top: linear
//! trend forecasting, cost-spike detection, and executive summaries.
//!
//! Every operation is a pure, synchronous function over immutable
//! inputs; callers own all I/O and scheduling.
//!
//! - [`focus`]: canonical records, row validation, private-DC
//!   normalization, batch ingestion
//! - [`forecast`]: least-squares cost trend projection
//! - [`insight`]: anomaly detection and executive summaries
//!
//! # Example
//!
//! ```rust
//! use costful::focus::{normalize_private_dc, PrivateDcInputs};
//! use costful::insight::generate_executive_summary;
//!
//! let records = normalize_private_dc(&PrivateDcInputs::new(180_000.0, 5.0, 1_200.0))?;
//! assert_eq!(records.len(), 2);
//!
//! let summary = generate_executive_summary(&records, &[]);
//! assert!(summary.len() >= 2);
//! # Ok::<(), costful::focus::FocusError>(())
//! ```

pub use focus_facade as focus;
pub use forecast_facade as forecast;
pub use insight_facade as insight;
