//! WCAG color math: hex parsing, linearization, luminance, contrast.

pub mod hex;
pub mod wcag;
