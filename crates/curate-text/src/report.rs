use std::fmt::Write;

use curate_core::types::ClassificationResult;

/// Human-readable report, ending with a ready-to-edit `btr curate` command.
pub fn render_report(result: &ClassificationResult) -> String {
    let tags = if result.tags.is_empty() {
        "None detected".to_string()
    } else {
        result.tags.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "BTR Metadata Extraction Results");
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(
        out,
        "Suggested Domain: {} (confidence: {})",
        result.domain.label,
        format_confidence(result.domain.confidence)
    );
    let _ = writeln!(out, "Suggested Topic:  {}", result.topic);
    let _ = writeln!(out, "Tags:             {}", tags);
    let _ = writeln!(out, "Summary:          {}", result.summary);
    let _ = writeln!(
        out,
        "Content Size:     {} lines, {} characters",
        result.line_count, result.length
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Suggested Command:");
    let _ = writeln!(out, "  {}", suggested_command(result));
    out
}

pub fn suggested_command(result: &ClassificationResult) -> String {
    let tags = if result.tags.is_empty() {
        "add-tags-here".to_string()
    } else {
        result.tags.join(",")
    };
    format!(
        "btr curate {} {} --content \"...\" --tags {}",
        result.domain.label, result.topic, tags
    )
}

/// Always show at least one decimal, so `1.0` does not print as `1`.
fn format_confidence(c: f64) -> String {
    if c.fract() == 0.0 {
        format!("{:.1}", c)
    } else {
        format!("{}", c)
    }
}
