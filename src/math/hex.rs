use crate::error::{ContrastError, Result};
use crate::types::Color;

/// Parse a hex color string to RGB channels (0-255).
/// Accepts exactly 3 or 6 hex digits with an optional leading `#`,
/// case-insensitive. 3-digit shorthand expands by digit doubling
/// (`#abc` -> `#aabbcc`).
pub fn parse_hex_color(input: &str) -> Result<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let err = || ContrastError::InvalidColorFormat {
        input: input.to_string(),
    };

    // from_str_radix alone is too lenient (it accepts a leading `+`), so
    // every byte is checked first.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }

    match digits.len() {
        3 => {
            let r = u8::from_str_radix(&digits[0..1].repeat(2), 16).map_err(|_| err())?;
            let g = u8::from_str_radix(&digits[1..2].repeat(2), 16).map_err(|_| err())?;
            let b = u8::from_str_radix(&digits[2..3].repeat(2), 16).map_err(|_| err())?;
            Ok(Color::new(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| err())?;
            let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| err())?;
            let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| err())?;
            Ok(Color::new(r, g, b))
        }
        _ => Err(err()),
    }
}
