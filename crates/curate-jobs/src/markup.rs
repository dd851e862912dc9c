use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Replace every `<...>` tag with `replacement`. Entities are left as-is.
pub fn strip_tags(html: &str, replacement: &str) -> String {
    RE_TAG.replace_all(html, replacement).into_owned()
}

/// Keep at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_become_replacement() {
        assert_eq!(strip_tags("<p>a<i>b</i></p>", " "), " a b  ");
        assert_eq!(strip_tags("<a href=\"x\">link</a>", ""), "link");
        assert_eq!(strip_tags("a &amp; b", ""), "a &amp; b");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ok", 10), "ok");
    }
}
