//! Domain types shared by the classifier and the job fetch step.

use serde::{Deserialize, Serialize};

/// Label returned when no domain pattern matches anywhere in the text.
pub const NEUTRAL_DOMAIN: &str = "general";

/// A coarse category guess with the winner's share of all pattern matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainGuess {
    #[serde(rename = "suggested")]
    pub label: String,
    pub confidence: f64,
}

impl DomainGuess {
    pub fn neutral() -> Self {
        Self {
            label: NEUTRAL_DOMAIN.to_string(),
            confidence: 0.0,
        }
    }
}

/// Everything the classifier derives from one blob of text.
///
/// - `tags`: deduplicated, lexicographically sorted
/// - `topic`: kebab-case identifier, safe for file names
/// - `length`: number of characters
/// - `line_count`: number of newline-separated segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub domain: DomainGuess,
    pub topic: String,
    pub tags: Vec<String>,
    pub summary: String,
    #[serde(rename = "content_length")]
    pub length: usize,
    pub line_count: usize,
}

/// One job listing derived from a single discussion comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingRecord {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub posted_at: i64,
}

/// Payload forwarded downstream for every accepted posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEvent {
    pub source: String,
    pub raw_job: PostingRecord,
}

/// Input that starts a fetch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchTrigger {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Success,
    Error,
}

/// Bookkeeping persisted after each fetch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatus {
    pub last_fetch: String,
    pub job_count: usize,
    pub status: FetchStatus,
    pub error: Option<String>,
}
