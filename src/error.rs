//! Error types for contrast-rules.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContrastError>;

/// Errors produced by the contrast engine.
///
/// Malformed color input is the only error condition. A failing contrast
/// check is an ordinary result (`passes == false`), never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContrastError {
    /// The input was not a 3- or 6-digit hex color.
    #[error("invalid color format: {input:?} is not a 3- or 6-digit hex color")]
    InvalidColorFormat { input: String },
}
