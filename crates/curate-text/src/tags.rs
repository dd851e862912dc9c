use std::collections::BTreeSet;

use crate::rules::TAG_RULES;

/// Technology and concept tags present anywhere in `text`, sorted and unique.
pub fn extract_tags(text: &str) -> Vec<String> {
    TAG_RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
