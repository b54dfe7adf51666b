//! Reusable contrast rules.
//!
//! A rule pairs a reference text color with a required compliance level and
//! an optional failure message template. Checking a rule against a candidate
//! background yields nothing when the contrast passes; a failing check
//! yields a rendered violation, since failing contrast is data rather than
//! an error.

use serde::{Deserialize, Serialize};

use crate::checker;
use crate::report;
use crate::types::{Color, ComplianceLevel, ContrastResult};

/// Default failure message template. Placeholders are substituted by
/// [`report::render_message`].
pub const DEFAULT_MESSAGE: &str = "Color does not meet WCAG {level} contrast requirements \
({required}:1) against {textColor} text. Current ratio: {ratio}:1";

/// A contrast requirement: candidate backgrounds must reach `level` against
/// `text_color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastRule {
    /// Reference text color the candidate background is checked against.
    pub text_color: Color,
    pub level: ComplianceLevel,
    /// Custom failure message template; the default announces the level,
    /// the requirement, the reference color and the measured ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// White text at AA, the most common requirement.
impl Default for ContrastRule {
    fn default() -> Self {
        ContrastRule {
            text_color: Color::WHITE,
            level: ComplianceLevel::AA,
            message: None,
        }
    }
}

impl ContrastRule {
    pub fn new(text_color: Color, level: ComplianceLevel) -> Self {
        ContrastRule {
            text_color,
            level,
            message: None,
        }
    }

    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Check a candidate background color against this rule.
    ///
    /// Returns `None` when the contrast passes. A failing check returns the
    /// rendered message plus the underlying result.
    pub fn check(&self, background: Color) -> Option<RuleViolation> {
        let result = checker::evaluate(background, self.text_color, self.level);
        if result.passes {
            return None;
        }

        let template = self.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        Some(RuleViolation {
            message: report::render_message(template, &result, self.text_color),
            result,
        })
    }
}

/// A failed rule check.
#[derive(Debug, Clone, Serialize)]
pub struct RuleViolation {
    pub message: String,
    pub result: ContrastResult,
}
