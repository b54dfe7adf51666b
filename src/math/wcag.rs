use crate::types::Color;

/// Convert an sRGB channel (0-255) to linear light.
/// sRGB -> linear: if s <= 0.03928: s/12.92, else ((s+0.055)/1.055)^2.4
///
/// The knee constant is the WCAG 2.1 literal. All arithmetic is f64; the
/// constants must stay exactly as written.
fn srgb_to_linear(channel: u8) -> f64 {
    let s = channel as f64 / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate the WCAG 2.1 contrast ratio between two colors, in [1, 21].
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// The max/min selection makes the result independent of argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
