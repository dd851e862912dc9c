//! Turns one "Who is hiring" comment into a [`PostingRecord`].
//!
//! Postings conventionally open with a `Company | Role | Location | ...`
//! header line followed by `<p>` paragraphs. Anything that does not yield at
//! least two non-empty header fields is dropped.
use chrono::Utc;

use curate_core::types::PostingRecord;

use crate::hn::HnItem;
use crate::markup::{strip_tags, truncate_chars};

pub const MAX_COMPANY_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_TITLE: &str = "Software Engineer";
pub const DEFAULT_LOCATION: &str = "Remote";

pub const DEFAULT_ITEM_URL: &str = "https://news.ycombinator.com/item";

const PARAGRAPH_BREAK: &str = "<p>";
const MIN_HEADER_FIELDS: usize = 2;

#[derive(Debug, Clone)]
pub struct PostingParser {
    item_url: String,
}

impl Default for PostingParser {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_URL)
    }
}

impl PostingParser {
    pub fn new(item_url: impl Into<String>) -> Self {
        Self {
            item_url: item_url.into(),
        }
    }

    pub fn parse(&self, comment: &HnItem) -> Option<PostingRecord> {
        self.parse_at(comment, Utc::now().timestamp())
    }

    /// Like [`PostingParser::parse`], with `now` standing in for a missing
    /// comment timestamp.
    pub fn parse_at(&self, comment: &HnItem, now: i64) -> Option<PostingRecord> {
        if comment.deleted {
            return None;
        }
        let text = comment.text.as_deref().filter(|t| !t.trim().is_empty())?;

        let header = header_line(text)?;
        let fields: Vec<&str> = header.split('|').map(str::trim).collect();
        if fields.iter().filter(|f| !f.is_empty()).count() < MIN_HEADER_FIELDS {
            return None;
        }

        let description = strip_tags(text, " ");
        Some(PostingRecord {
            id: comment.id.to_string(),
            company: pick_field(&fields, 0, DEFAULT_COMPANY, MAX_COMPANY_LEN),
            title: pick_field(&fields, 1, DEFAULT_TITLE, MAX_TITLE_LEN),
            location: pick_field(&fields, 2, DEFAULT_LOCATION, MAX_LOCATION_LEN),
            description: truncate_chars(description.trim(), MAX_DESCRIPTION_LEN),
            url: format!("{}?id={}", self.item_url, comment.id),
            posted_at: comment.time.unwrap_or(now),
        })
    }
}

/// Parse with the default item URL.
pub fn parse_comment(comment: &HnItem) -> Option<PostingRecord> {
    PostingParser::default().parse(comment)
}

/// Text before the first paragraph break, markup removed. A comment that
/// opens with `<p>` uses the first paragraph that has any text.
fn header_line(text: &str) -> Option<String> {
    text.split(PARAGRAPH_BREAK)
        .map(|segment| strip_tags(segment, "").trim().to_string())
        .find(|segment| !segment.is_empty())
}

fn pick_field(fields: &[&str], idx: usize, default: &str, max: usize) -> String {
    let value = fields
        .get(idx)
        .copied()
        .filter(|f| !f.is_empty())
        .unwrap_or(default);
    truncate_chars(value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> HnItem {
        HnItem {
            id: 1,
            text: Some(text.to_string()),
            time: Some(100),
            ..Default::default()
        }
    }

    #[test]
    fn header_stops_at_first_paragraph() {
        assert_eq!(header_line("A | B<p>C | D").as_deref(), Some("A | B"));
        assert_eq!(header_line("<p>A | <b>B</b></p>").as_deref(), Some("A | B"));
        assert_eq!(header_line("<p></p>"), None);
    }

    #[test]
    fn blank_fields_fall_back_to_defaults() {
        let p = PostingParser::default()
            .parse_at(&comment(" | Staff Engineer |  | Visa"), 0)
            .unwrap();
        assert_eq!(p.company, DEFAULT_COMPANY);
        assert_eq!(p.title, "Staff Engineer");
        assert_eq!(p.location, DEFAULT_LOCATION);

        let p = PostingParser::default().parse_at(&comment("Acme || Berlin"), 0).unwrap();
        assert_eq!(p.title, DEFAULT_TITLE);
        assert_eq!(p.location, "Berlin");
    }

    #[test]
    fn one_non_empty_field_is_rejected() {
        assert!(
            PostingParser::default().parse_at(&comment("Acme | "), 0).is_none()
        );
        assert!(
            PostingParser::default().parse_at(&comment("   "), 0).is_none()
        );
    }
}
