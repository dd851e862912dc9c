//! Static pattern tables for tag and domain detection.
//!
//! Both tables are compiled once on first use and never mutated. The domain
//! table is an ordered slice: its order is the tie-break order.
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A compiled pattern and the label it votes for.
pub struct PatternRule {
    pub pattern: Regex,
    pub label: &'static str,
}

/// A domain label and every pattern that counts towards it.
pub struct DomainRule {
    pub label: &'static str,
    pub patterns: Vec<Regex>,
}

const TAG_PATTERNS: &[(&str, &str)] = &[
    // Languages
    (r"\btypescript\b|\bts\b", "typescript"),
    (r"\bjavascript\b|\bjs\b", "javascript"),
    (r"\bpython\b|\bpy\b", "python"),
    (r"\brust\b", "rust"),
    (r"\bgo\b|\bgolang\b", "go"),
    // Frameworks
    (r"\breact\b", "react"),
    (r"\bnext\.?js\b|\bnextjs\b", "nextjs"),
    (r"\bvue\b", "vue"),
    (r"\bangular\b", "angular"),
    (r"\bexpress\b", "express"),
    (r"\bfastapi\b", "fastapi"),
    (r"\bdjango\b", "django"),
    // Databases
    (r"\bpostgres(?:ql)?\b", "postgresql"),
    (r"\bmysql\b", "mysql"),
    (r"\bmongodb?\b", "mongodb"),
    (r"\bredis\b", "redis"),
    (r"\bsqlite\b", "sqlite"),
    // Cloud / DevOps
    (r"\baws\b", "aws"),
    (r"\bgcp\b|\bgoogle cloud\b", "gcp"),
    (r"\bazure\b", "azure"),
    (r"\bdocker\b", "docker"),
    (r"\bkubernetes\b|\bk8s\b", "kubernetes"),
    // Concepts
    (r"\bjwt\b", "jwt"),
    (r"\boauth\b", "oauth"),
    (r"\brest\b|\brestful\b", "rest"),
    (r"\bgraphql\b", "graphql"),
    (r"\bwebsocket\b", "websocket"),
    (r"\bmiddleware\b", "middleware"),
    (r"\bcaching\b|\bcache\b", "caching"),
    (r"\bvalidation\b|\bvalidate\b", "validation"),
    (r"\bauth(?:entication)?\b", "authentication"),
    (r"\bauthoriz(?:ation|e)\b", "authorization"),
];

const DOMAIN_PATTERNS: &[(&str, &[&str])] = &[
    (
        "auth",
        &[
            r"\bauth\b",
            r"\blogin\b",
            r"\bjwt\b",
            r"\btoken\b",
            r"\bsession\b",
            r"\boauth\b",
            r"\bpassword\b",
        ],
    ),
    (
        "api",
        &[
            r"\bendpoint\b",
            r"\brest\b",
            r"\bgraphql\b",
            r"\broute\b",
            r"\brequest\b",
            r"\bresponse\b",
            r"\bmiddleware\b",
        ],
    ),
    (
        "database",
        &[
            r"\bsql\b",
            r"\bquery\b",
            r"\bmigration\b",
            r"\borm\b",
            r"\bpostgres\b",
            r"\bmongo\b",
            r"\bredis\b",
        ],
    ),
    (
        "frontend",
        &[
            r"\breact\b",
            r"\bcomponent\b",
            r"\bhook\b",
            r"\bcss\b",
            r"\bstyle\b",
            r"\bdom\b",
            r"\bui\b",
        ],
    ),
    (
        "testing",
        &[
            r"\btest\b",
            r"\bspec\b",
            r"\bmock\b",
            r"\bjest\b",
            r"\bpytest\b",
            r"\bfixture\b",
            r"\bassert\b",
        ],
    ),
    (
        "devops",
        &[
            r"\bdocker\b",
            r"\bci\b",
            r"\bcd\b",
            r"\bdeploy\b",
            r"\bkubernetes\b",
            r"\bhelm\b",
            r"\bterraform\b",
        ],
    ),
    (
        "architecture",
        &[
            r"\bpattern\b",
            r"\bdesign\b",
            r"\bdecision\b",
            r"\barchitecture\b",
            r"\bstructure\b",
        ],
    ),
    (
        "security",
        &[
            r"\bsecurity\b",
            r"\bvulnerability\b",
            r"\bencrypt\b",
            r"\bsanitize\b",
            r"\bxss\b",
            r"\bcsrf\b",
        ],
    ),
    (
        "performance",
        &[
            r"\bperformance\b",
            r"\boptimi[sz]\w*",
            r"\bcache\b",
            r"\blatency\b",
            r"\bthroughput\b",
        ],
    ),
];

pub static TAG_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    TAG_PATTERNS
        .iter()
        .map(|&(pattern, label)| PatternRule {
            pattern: case_insensitive(pattern),
            label,
        })
        .collect()
});

pub static DOMAIN_RULES: LazyLock<Vec<DomainRule>> = LazyLock::new(|| {
    DOMAIN_PATTERNS
        .iter()
        .map(|&(label, patterns)| DomainRule {
            label,
            patterns: patterns.iter().map(|p| case_insensitive(p)).collect(),
        })
        .collect()
});

// The tables above are literals; a failure here is a programming error.
#[allow(clippy::expect_used)]
fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern compiles")
}
