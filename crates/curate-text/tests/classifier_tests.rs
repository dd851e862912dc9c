use std::thread;

use curate_text::{
    detect_domain, extract_metadata, extract_tags, generate_summary, generate_topic, Classifier,
};

const SAMPLE: &str = r#"/**
 * Validates the JWT on every request before it reaches a route.
 */
export function authMiddleware(req, res, next) {
  const token = req.headers.authorization;
  // verify token, check session, then call next()
}
"#;

const INPUTS: &[&str] = &[
    SAMPLE,
    "",
    "# Getting Started with Testing\n\nUse jest and pytest; mock the fixture.",
    "Docker + Kubernetes (k8s) deploy with Helm and Terraform on AWS.",
    "plain words, nothing technical at all",
    "React component hook with CSS style in the UI using TypeScript and Next.js",
];

#[test]
fn tags_are_sorted_unique_and_deterministic() {
    for text in INPUTS {
        let first = extract_tags(text);
        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first, sorted, "tags for {text:?}");
        assert_eq!(first, extract_tags(text), "rerun for {text:?}");
    }
}

#[test]
fn confidence_stays_in_unit_interval() {
    for text in INPUTS {
        let guess = detect_domain(text);
        assert!(
            (0.0..=1.0).contains(&guess.confidence),
            "{text:?} -> {guess:?}"
        );
    }
    let neutral = detect_domain("plain words, nothing technical at all");
    assert_eq!(neutral.label, "general");
    assert_eq!(neutral.confidence, 0.0);
}

#[test]
fn topic_examples() {
    assert_eq!(
        generate_topic("function calculateTotal() {...}"),
        "calculate-total"
    );
    assert_eq!(
        generate_topic("# Getting Started with Testing"),
        "getting-started-with"
    );
}

#[test]
fn summary_example() {
    assert_eq!(
        generate_summary(r#""""Fetches jobs from a thread.""""#, 150),
        "Fetches jobs from a thread."
    );
}

#[test]
fn full_classification_of_sample() {
    let result = extract_metadata(SAMPLE);
    // token x2, session x1, jwt x1 for auth; request x1, route x1 for api
    assert_eq!(result.domain.label, "auth");
    assert_eq!(result.domain.confidence, 0.67);
    assert_eq!(result.topic, "auth-middleware");
    // `authMiddleware` has no word boundary before "middleware"
    assert_eq!(result.tags, vec!["authorization", "jwt"]);
    assert_eq!(
        result.summary,
        "Validates the JWT on every request before it reaches a route."
    );
    assert_eq!(result.line_count, 8);
    assert_eq!(result.length, SAMPLE.chars().count());
}

#[test]
fn devops_text() {
    let result = extract_metadata(INPUTS[3]);
    assert_eq!(result.domain.label, "devops");
    assert_eq!(result.domain.confidence, 1.0);
    assert_eq!(result.tags, vec!["aws", "docker", "kubernetes"]);
    assert_eq!(result.topic, "docker-kubernetes-deploy");
}

#[test]
fn json_uses_snake_case_wire_keys() {
    let json = serde_json::to_value(extract_metadata("# Redis cache notes")).unwrap();
    assert_eq!(json["domain"]["suggested"], "database");
    assert_eq!(json["domain"]["confidence"], 0.5);
    assert_eq!(json["topic"], "redis-cache-notes");
    assert_eq!(json["tags"], serde_json::json!(["caching", "redis"]));
    assert_eq!(json["summary"], "Redis cache notes");
    assert_eq!(json["content_length"], 19);
    assert_eq!(json["line_count"], 1);
}

#[test]
fn summary_length_is_configurable() {
    let text = "A fairly long first line that keeps going well past the limit";
    let result = Classifier::new(20).classify(text);
    assert_eq!(result.summary.chars().count(), 20);
    assert!(result.summary.ends_with("..."));
}

#[test]
fn classifier_is_shareable_across_threads() {
    let classifier = Classifier::default();
    let expected = classifier.classify(SAMPLE);
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || classifier.classify(SAMPLE)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
