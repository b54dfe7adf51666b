//! Report rendering for contrast checks.
//!
//! Two formats:
//! - Text: human-readable, one line per checked pair
//! - JSON: structured output over the serde derives
//!
//! Message templates support the placeholders `{ratio}`, `{textColor}`,
//! `{required}` and `{level}`. Ratios are rounded to 2 decimals for display
//! only; pass/fail decisions never use the rounded value.

use std::fmt;
use std::str::FromStr;

use crate::types::{BatchOutcome, Color, ContrastResult, PairOutcome};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Substitute `{ratio}`, `{textColor}`, `{required}` and `{level}` in a
/// message template. `{ratio}` uses the 2-decimal display rounding;
/// `{textColor}` uses the display name of the reference color.
pub fn render_message(template: &str, result: &ContrastResult, text_color: Color) -> String {
    template
        .replace("{ratio}", &result.rounded_ratio().to_string())
        .replace("{textColor}", &color_display_name(text_color))
        .replace("{required}", &result.required_ratio.to_string())
        .replace("{level}", result.level.label())
}

/// Display name for a reference color: `#ffffff` is "white", `#000000` is
/// "black", anything else its hex form.
pub fn color_display_name(color: Color) -> String {
    match color {
        Color::WHITE => "white".to_string(),
        Color::BLACK => "black".to_string(),
        other => other.to_string(),
    }
}

/// Render a single checked pair.
pub fn pair_report(outcome: &PairOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => pair_line(outcome),
        OutputFormat::Json => to_json(outcome),
    }
}

/// Generate a batch report.
pub fn generate_report(outcome: &BatchOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => batch_text_report(outcome),
        OutputFormat::Json => to_json(outcome),
    }
}

fn pair_line(outcome: &PairOutcome) -> String {
    let result = &outcome.result;
    let verdict = if result.passes { "passes" } else { "fails" };
    format!(
        "{} on {}: ratio {}:1 {} WCAG {} (requires {}:1)",
        outcome.text,
        outcome.background,
        result.rounded_ratio(),
        verdict,
        result.level,
        result.required_ratio
    )
}

fn batch_text_report(outcome: &BatchOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Checked {} pair(s): {} violation(s), {} passed, {} invalid\n",
        outcome.total(),
        outcome.violations.len(),
        outcome.passed.len(),
        outcome.invalid.len()
    ));

    if !outcome.violations.is_empty() {
        output.push_str("\n--- Violations ---\n");
        for pair in &outcome.violations {
            output.push_str(&pair_line(pair));
            output.push('\n');
        }
    }

    if !outcome.invalid.is_empty() {
        output.push_str("\n--- Invalid entries ---\n");
        for invalid in &outcome.invalid {
            output.push_str(&format!(
                "{:?} / {:?}: {}\n",
                invalid.background, invalid.text, invalid.error
            ));
        }
    }

    output
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}
