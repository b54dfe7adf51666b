use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ContrastError;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Lowercase `#rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Strict hex parse: 3 or 6 hex digits, optional leading `#`.
impl FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::math::hex::parse_hex_color(s)
    }
}

/// Serializes as its hex string form (`"#1e293b"`).
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// WCAG conformance level for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComplianceLevel {
    /// Minimum contrast 4.5:1.
    #[default]
    AA,
    /// Minimum contrast 7.0:1.
    AAA,
}

impl ComplianceLevel {
    /// Minimum contrast ratio required at this level. Fixed table, not
    /// configurable at runtime.
    pub const fn min_ratio(self) -> f64 {
        match self {
            ComplianceLevel::AA => 4.5,
            ComplianceLevel::AAA => 7.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ComplianceLevel::AA => "AA",
            ComplianceLevel::AAA => "AAA",
        }
    }

    /// Map a level label to its variant. Anything other than the exact
    /// labels `"AA"` and `"AAA"` selects AA, the permissive default:
    /// unrecognized labels are not an error. Callers that want to reject
    /// unknown labels must match on them before calling this.
    pub fn from_label(label: &str) -> Self {
        match label {
            "AAA" => ComplianceLevel::AAA,
            _ => ComplianceLevel::AA,
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serializes as `"AA"` / `"AAA"`.
impl Serialize for ComplianceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Deserializes with the same label fallback as [`ComplianceLevel::from_label`].
impl<'de> Deserialize<'de> for ComplianceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ComplianceLevel::from_label(&raw))
    }
}

/// Outcome of evaluating one background/text pair against a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Contrast ratio at full precision, in [1.0, 21.0].
    pub ratio: f64,
    /// Minimum ratio the level demands.
    pub required_ratio: f64,
    pub level: ComplianceLevel,
    /// `ratio >= required_ratio`; equality passes.
    pub passes: bool,
}

impl ContrastResult {
    /// Ratio rounded to 2 decimals, for display only. The pass/fail
    /// decision always uses the full-precision `ratio`.
    pub fn rounded_ratio(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }
}

/// One entry of a batch check. Colors stay raw strings so a malformed
/// entry surfaces as its own invalid result instead of aborting the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPair {
    pub background: String,
    pub text: String,
    /// Overrides the batch-wide level when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ComplianceLevel>,
}

/// A checked pair with its parsed colors.
#[derive(Debug, Clone, Serialize)]
pub struct PairOutcome {
    pub background: Color,
    pub text: Color,
    pub result: ContrastResult,
}

/// A batch entry that failed color parsing.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidPair {
    pub background: String,
    pub text: String,
    pub error: String,
}

/// Categorized results of a batch check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub violations: Vec<PairOutcome>,
    pub passed: Vec<PairOutcome>,
    pub invalid: Vec<InvalidPair>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.violations.len() + self.passed.len() + self.invalid.len()
    }

    /// True when anything would block a release: a contrast violation or an
    /// entry that could not be parsed.
    pub fn has_failures(&self) -> bool {
        !self.violations.is_empty() || !self.invalid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_displays_lowercase_hex() {
        assert_eq!(Color::new(30, 41, 59).to_string(), "#1e293b");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn color_serde_round_trips_as_string() {
        let json = serde_json::to_string(&Color::new(255, 0, 128)).unwrap();
        assert_eq!(json, "\"#ff0080\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(255, 0, 128));
    }

    #[test]
    fn color_deserialize_rejects_garbage() {
        let result: Result<Color, _> = serde_json::from_str("\"#zzzzzz\"");
        assert!(result.is_err());
    }

    #[test]
    fn level_table() {
        assert_eq!(ComplianceLevel::AA.min_ratio(), 4.5);
        assert_eq!(ComplianceLevel::AAA.min_ratio(), 7.0);
    }

    #[test]
    fn level_from_label_exact() {
        assert_eq!(ComplianceLevel::from_label("AA"), ComplianceLevel::AA);
        assert_eq!(ComplianceLevel::from_label("AAA"), ComplianceLevel::AAA);
    }

    #[test]
    fn level_unknown_label_defaults_to_aa() {
        assert_eq!(ComplianceLevel::from_label("XYZ"), ComplianceLevel::AA);
        assert_eq!(ComplianceLevel::from_label(""), ComplianceLevel::AA);
        // Exact labels only; lowercase is not recognized.
        assert_eq!(ComplianceLevel::from_label("aaa"), ComplianceLevel::AA);
    }

    #[test]
    fn level_deserialize_applies_fallback() {
        let level: ComplianceLevel = serde_json::from_str("\"AAA\"").unwrap();
        assert_eq!(level, ComplianceLevel::AAA);
        let level: ComplianceLevel = serde_json::from_str("\"XYZ\"").unwrap();
        assert_eq!(level, ComplianceLevel::AA);
    }

    #[test]
    fn rounded_ratio_two_decimals() {
        let result = ContrastResult {
            ratio: 4.477843,
            required_ratio: 4.5,
            level: ComplianceLevel::AA,
            passes: false,
        };
        assert_eq!(result.rounded_ratio(), 4.48);
    }

    #[test]
    fn contrast_result_serializes_camel_case() {
        let result = ContrastResult {
            ratio: 21.0,
            required_ratio: 7.0,
            level: ComplianceLevel::AAA,
            passes: true,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"requiredRatio\":7.0"));
        assert!(json.contains("\"level\":\"AAA\""));
    }

    #[test]
    fn color_pair_level_is_optional() {
        let pair: ColorPair =
            serde_json::from_str(r##"{"background":"#ffffff","text":"#000000"}"##).unwrap();
        assert!(pair.level.is_none());
        let pair: ColorPair = serde_json::from_str(
            r##"{"background":"#ffffff","text":"#000000","level":"AAA"}"##,
        )
        .unwrap();
        assert_eq!(pair.level, Some(ComplianceLevel::AAA));
    }

    #[test]
    fn batch_outcome_failure_accounting() {
        let mut outcome = BatchOutcome::default();
        assert!(!outcome.has_failures());
        outcome.invalid.push(InvalidPair {
            background: "#zz".into(),
            text: "#fff".into(),
            error: "bad".into(),
        });
        assert!(outcome.has_failures());
        assert_eq!(outcome.total(), 1);
    }
}
