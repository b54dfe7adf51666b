//! Contrast evaluation against WCAG compliance levels.

use crate::math::wcag;
use crate::types::{Color, ComplianceLevel, ContrastResult};

/// Evaluate a background/text pair against a compliance level.
///
/// The required ratio comes from the level's fixed table and the comparison
/// uses the full-precision ratio; display rounding never feeds back into the
/// decision. A failing check is an ordinary result (`passes == false`), not
/// an error.
pub fn evaluate(background: Color, text: Color, level: ComplianceLevel) -> ContrastResult {
    let ratio = wcag::contrast_ratio(background, text);
    let required_ratio = level.min_ratio();
    ContrastResult {
        ratio,
        required_ratio,
        level,
        passes: ratio >= required_ratio,
    }
}
