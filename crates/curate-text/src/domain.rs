use curate_core::types::DomainGuess;

use crate::rules::DOMAIN_RULES;

/// Total match count per domain label, in table order.
///
/// Every non-overlapping match of every pattern counts, not just presence.
pub fn domain_scores(text: &str) -> Vec<(&'static str, usize)> {
    DOMAIN_RULES
        .iter()
        .map(|rule| {
            let count = rule
                .patterns
                .iter()
                .map(|p| p.find_iter(text).count())
                .sum();
            (rule.label, count)
        })
        .collect()
}

/// Weighted-majority domain guess.
///
/// The label with the strictly highest count wins; on a tie the earlier
/// label in the table keeps the lead. Confidence is the winner's share of
/// all matches, rounded to two decimals.
pub fn detect_domain(text: &str) -> DomainGuess {
    let scores = domain_scores(text);
    let total: usize = scores.iter().map(|&(_, c)| c).sum();
    if total == 0 {
        return DomainGuess::neutral();
    }

    let mut best = scores[0];
    for &(label, count) in &scores[1..] {
        if count > best.1 {
            best = (label, count);
        }
    }

    DomainGuess {
        label: best.0.to_string(),
        confidence: round2(best.1 as f64 / total as f64),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
