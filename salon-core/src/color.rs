//! Hex color parsing for the configurable site palette.
//!
//! Settings carry `#RGB` or `#RRGGBB` values; anything else falls back to
//! the default gold so the theme never ends up with an unusable variable.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

fn hex_channel(s: &str) -> Option<u8> {
    match u8::from_str_radix(s, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    // Guard before slicing: multibyte input must not reach the byte ranges,
    // and `from_str_radix` would otherwise take a leading sign.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = hex_channel(&hex[0..1].repeat(2))?;
            let g = hex_channel(&hex[1..2].repeat(2))?;
            let b = hex_channel(&hex[2..3].repeat(2))?;
            Some((r, g, b))
        }
        6 => {
            let r = hex_channel(&hex[0..2])?;
            let g = hex_channel(&hex[2..4])?;
            let b = hex_channel(&hex[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Whether a value is a color the settings endpoint will accept.
#[must_use]
pub fn is_valid_hex_color(value: &str) -> bool {
    parse_hex_rgb(value).is_some()
}

/// Normalize a color to canonical lowercase `#rrggbb`.
///
/// Falls back to `fallback`, and to the default gold when the fallback is
/// itself unusable.
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let fallback_rgb = parse_hex_rgb(fallback).unwrap_or((255, 215, 0));
    let (r, g, b) = parse_hex_rgb(value).unwrap_or(fallback_rgb);
    format!("#{r:02x}{g:02x}{b:02x}")
}
