//! WCAG 2.1 color-contrast checking.
//!
//! Computes the perceptual contrast ratio between a background and a text
//! color and classifies it against a WCAG compliance level (AA = 4.5:1,
//! AAA = 7.0:1). The core is pure and stateless: once colors are parsed,
//! every operation is total floating-point arithmetic, safe to call from
//! any thread without synchronization.
//!
//! ```
//! use contrast_rules::{evaluate, Color, ComplianceLevel};
//!
//! let background: Color = "#777777".parse()?;
//! let text: Color = "#ffffff".parse()?;
//!
//! let result = evaluate(background, text, ComplianceLevel::AA);
//! assert!(!result.passes); // 4.48:1 falls just short of 4.5:1
//! # Ok::<(), contrast_rules::ContrastError>(())
//! ```
//!
//! Beyond single checks, [`engine::evaluate_all`] audits many pairs in
//! parallel, and [`rules::ContrastRule`] packages a reference text color,
//! a level and a failure message template into a reusable check.

pub mod checker;
pub mod engine;
pub mod error;
pub mod math;
pub mod report;
pub mod rules;
pub mod types;

pub use checker::evaluate;
pub use error::{ContrastError, Result};
pub use math::wcag::{contrast_ratio, relative_luminance};
pub use types::{BatchOutcome, Color, ColorPair, ComplianceLevel, ContrastResult};
