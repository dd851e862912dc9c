//! One-line summaries pulled from docstrings, doc comments, headings or the
//! first meaningful line.
use regex::Regex;
use std::sync::LazyLock;

pub const NO_SUMMARY: &str = "No summary available";
pub const TRUNCATION_MARKER: &str = "...";

pub type SummaryStrategy = fn(&str) -> Option<String>;

pub const STRATEGIES: &[SummaryStrategy] = &[
    from_docstring,
    from_doc_comment,
    from_heading,
    from_first_line,
];

struct SummaryPatterns {
    docstring: Regex,
    doc_comment: Regex,
    heading: Regex,
}

#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<SummaryPatterns> = LazyLock::new(|| SummaryPatterns {
    docstring: Regex::new(r#""""([^"]+)""""#).unwrap(),
    // /** Leading line   or   /**\n * Leading line
    doc_comment: Regex::new(r"/\*\*\s*\n?\s*\*?\s*([^\n*]+)").unwrap(),
    heading: Regex::new(r"(?m)^#+\s*(.+)$").unwrap(),
});

const COMMENT_MARKERS: &[&str] = &["#", "//", "/*", "*"];

/// First successful strategy, truncated to `max_len` characters.
pub fn generate_summary(text: &str, max_len: usize) -> String {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .map(|s| truncate_with_marker(&s, max_len))
        .unwrap_or_else(|| NO_SUMMARY.to_string())
}

pub fn from_docstring(text: &str) -> Option<String> {
    first_capture(&PATTERNS.docstring, text)
}

pub fn from_doc_comment(text: &str) -> Option<String> {
    first_capture(&PATTERNS.doc_comment, text)
}

pub fn from_heading(text: &str) -> Option<String> {
    first_capture(&PATTERNS.heading, text)
}

/// First non-blank line that is not itself a comment or heading marker.
pub fn from_first_line(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| {
            !line.is_empty() && !COMMENT_MARKERS.iter().any(|m| line.starts_with(m))
        })
        .map(str::to_string)
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Cut to at most `max_len` characters, reserving room for the marker.
/// Budgets too small to hold the marker get a plain cut.
pub fn truncate_with_marker(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= TRUNCATION_MARKER.len() {
        return s.chars().take(max_len).collect();
    }
    let keep = max_len - TRUNCATION_MARKER.len();
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docstring_wins() {
        assert_eq!(
            generate_summary(r#""""Fetches jobs from a thread.""""#, 150),
            "Fetches jobs from a thread."
        );
        let text = "# Heading\ndef f():\n    \"\"\"  Inner doc  \"\"\"";
        assert_eq!(generate_summary(text, 150), "Inner doc");
    }

    #[test]
    fn jsdoc_leading_line() {
        let text = concat!(
            "/**\n * Formats a price for display.\n * @param cents\n */\n",
            "function fmt(cents) {}",
        );
        assert_eq!(
            generate_summary(text, 150),
            "Formats a price for display."
        );
        assert_eq!(generate_summary("/** Inline doc */", 150), "Inline doc");
    }

    #[test]
    fn heading_before_plain_lines() {
        assert_eq!(
            generate_summary("intro line\n## Setup Guide\nmore", 150),
            "Setup Guide"
        );
    }

    #[test]
    fn first_meaningful_line_skips_comments() {
        let text = "\n// generated\n* bullet\n   Real content here  \nnext";
        assert_eq!(generate_summary(text, 150), "Real content here");
    }

    #[test]
    fn sentinel_when_nothing_found() {
        assert_eq!(
            generate_summary("// only\n/* comments */", 150),
            NO_SUMMARY
        );
    }

    #[test]
    fn truncation_keeps_marker_inside_budget() {
        let long = "x".repeat(200);
        let out = generate_summary(&long, 150);
        assert_eq!(out.chars().count(), 150);
        assert!(out.ends_with("..."));
        assert_eq!(truncate_with_marker("short", 150), "short");
        assert_eq!(truncate_with_marker("ééééé", 4), "é...");
    }

    #[test]
    fn tiny_budgets_never_overflow() {
        assert_eq!(truncate_with_marker("abcdef", 0), "");
        assert_eq!(truncate_with_marker("abcdef", 2), "ab");
        assert_eq!(truncate_with_marker("abcdef", 3), "abc");
        assert_eq!(generate_summary("A longer first line", 1), "A");
    }
}
