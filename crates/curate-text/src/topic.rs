//! Short, filesystem-safe topic identifiers.
//!
//! Strategies run in [`STRATEGIES`] order and the first non-empty result
//! wins; later strategies are never consulted.
use regex::Regex;
use std::sync::LazyLock;

pub const FALLBACK_TOPIC: &str = "untitled-context";

pub type TopicStrategy = fn(&str) -> Option<String>;

pub const STRATEGIES: &[TopicStrategy] =
    &[from_binding, from_type_declaration, from_first_line];

struct TopicPatterns {
    binding: Regex,
    type_declaration: Regex,
    heading_marker: Regex,
    word: Regex,
    camel_boundary: Regex,
}

#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<TopicPatterns> = LazyLock::new(|| TopicPatterns {
    // function foo / def foo / const foo / let foo / var foo
    binding: Regex::new(r"\b(?:function|def|const|let|var)\s+(\w+)").unwrap(),
    type_declaration: Regex::new(r"\bclass\s+(\w+)").unwrap(),
    heading_marker: Regex::new(r"^#+\s*").unwrap(),
    word: Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap(),
    camel_boundary: Regex::new(r"([a-z])([A-Z])").unwrap(),
});

pub fn generate_topic(text: &str) -> String {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| FALLBACK_TOPIC.to_string())
}

/// Name bound by a function or variable declaration.
pub fn from_binding(text: &str) -> Option<String> {
    PATTERNS.binding.captures(text).map(|c| kebab_case(&c[1]))
}

/// Name introduced by a class declaration.
pub fn from_type_declaration(text: &str) -> Option<String> {
    PATTERNS
        .type_declaration
        .captures(text)
        .map(|c| kebab_case(&c[1]))
}

/// First three words of at least three letters from the first line,
/// ignoring any markdown heading marker.
pub fn from_first_line(text: &str) -> Option<String> {
    let first_line = text.split('\n').next().unwrap_or("").trim();
    let first_line = PATTERNS.heading_marker.replace(first_line, "");
    let words: Vec<String> = PATTERNS
        .word
        .find_iter(&first_line)
        .take(3)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    (!words.is_empty()).then(|| words.join("-"))
}

/// `calculateTotal` -> `calculate-total`.
pub fn kebab_case(ident: &str) -> String {
    PATTERNS
        .camel_boundary
        .replace_all(ident, "${1}-${2}")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_name_becomes_kebab_case() {
        assert_eq!(
            generate_topic("function calculateTotal() {...}"),
            "calculate-total"
        );
        assert_eq!(generate_topic("def fetch_jobs(client):"), "fetch_jobs");
        assert_eq!(generate_topic("const apiBaseUrl = '/v1';"), "api-base-url");
    }

    #[test]
    fn bindings_take_precedence_over_classes() {
        let text = "class UserService {}\nconst userCache = new Map();";
        assert_eq!(generate_topic(text), "user-cache");
    }

    #[test]
    fn class_name_is_used_without_bindings() {
        assert_eq!(
            generate_topic("class TokenRefresher:\n    pass"),
            "token-refresher"
        );
    }

    #[test]
    fn keywords_inside_words_are_not_declarations() {
        assert_eq!(
            generate_topic("# Bullet points for the meeting"),
            "bullet-points-for"
        );
        assert_eq!(generate_topic("Outlet sizing notes"), "outlet-sizing-notes");
        assert_eq!(
            generate_topic("subclass Widget overview"),
            "subclass-widget-overview"
        );
    }

    #[test]
    fn heading_words_are_joined() {
        assert_eq!(
            generate_topic("# Getting Started with Testing"),
            "getting-started-with"
        );
        assert_eq!(from_first_line("## A to Z of it"), None);
    }

    #[test]
    fn falls_back_when_nothing_matches() {
        assert_eq!(generate_topic("12 + 34 = 46"), FALLBACK_TOPIC);
        assert_eq!(generate_topic("\nsecond line words only"), FALLBACK_TOPIC);
    }

    #[test]
    fn kebab_case_splits_each_boundary() {
        assert_eq!(kebab_case("parseHTTPResponse"), "parse-httpresponse");
        assert_eq!(kebab_case("aBcD"), "a-bc-d");
    }
}
