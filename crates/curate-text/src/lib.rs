//! curate-text
//!
//! Heuristic metadata extraction for a blob of text: technology tags, a coarse
//! domain with a confidence score, a kebab-case topic and a one-line summary.
//! Everything here is a pure function over `&str` backed by static pattern
//! tables, so a [`Classifier`] can be shared freely across threads.
pub mod domain;
pub mod report;
pub mod rules;
pub mod summary;
pub mod tags;
pub mod topic;

use curate_core::types::ClassificationResult;

pub use domain::detect_domain;
pub use report::{render_report, suggested_command};
pub use summary::generate_summary;
pub use tags::extract_tags;
pub use topic::generate_topic;

pub const DEFAULT_SUMMARY_MAX_LEN: usize = 150;

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    summary_max_len: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        }
    }
}

impl Classifier {
    pub fn new(summary_max_len: usize) -> Self {
        Self { summary_max_len }
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        ClassificationResult {
            domain: detect_domain(text),
            topic: generate_topic(text),
            tags: extract_tags(text),
            summary: generate_summary(text, self.summary_max_len),
            length: text.chars().count(),
            line_count: text.split('\n').count(),
        }
    }
}

/// Classify with default settings.
pub fn extract_metadata(text: &str) -> ClassificationResult {
    Classifier::default().classify(text)
}
