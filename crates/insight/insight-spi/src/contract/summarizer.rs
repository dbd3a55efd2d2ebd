//! Executive summarizer trait definition.

use focus_spi::CanonicalRecord;

/// Narrative summary generator trait.
///
/// `public_records` is part of the contract for upcoming cross-cloud
/// comparison insights; current implementations read only the private
/// set.
pub trait ExecutiveSummarizer: Send + Sync {
    /// Produce ranked narrative insight strings.
    fn summarize(
        &self,
        private_records: &[CanonicalRecord],
        public_records: &[CanonicalRecord],
    ) -> Vec<String>;
}
