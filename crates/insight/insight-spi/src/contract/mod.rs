//! Contract definitions for cost insights.

mod detector;
mod summarizer;

pub use detector::CostAnomalyDetector;
pub use summarizer::ExecutiveSummarizer;
