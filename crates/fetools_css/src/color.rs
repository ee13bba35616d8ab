//! Hex color helpers shared by the gradient, shadow and glass builders
//!
//! Channel parsing is lenient: it reads the leading hex digits of a slice and
//! yields `NaN` when there are none, so malformed colors show up in the CSS
//! text instead of failing.

use crate::number::{to_fixed, JsNumber};

/// Parse the leading hex digits of `digits`; `NaN` if there are none.
fn parse_hex_prefix(digits: &str) -> f64 {
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(digits.len(), |(idx, _)| idx);

    match &digits[..end] {
        "" => f64::NAN,
        prefix => u64::from_str_radix(prefix, 16).map_or(f64::NAN, |v| v as f64),
    }
}

/// Slice `chars[start..end]` by character index, clamped to the string.
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Red, green and blue channels of a `#rrggbb` color.
pub fn hex_channels(hex: &str) -> [f64; 3] {
    [
        parse_hex_prefix(&char_slice(hex, 1, 3)),
        parse_hex_prefix(&char_slice(hex, 3, 5)),
        parse_hex_prefix(&char_slice(hex, 5, 7)),
    ]
}

/// `r, g, b` for a `#rrggbb` color.
pub fn hex_to_rgb(hex: &str) -> String {
    let [r, g, b] = hex_channels(hex);
    format!("{}, {}, {}", JsNumber(r), JsNumber(g), JsNumber(b))
}

/// `rgba(r, g, b, a)` for a `#rrggbb` color, alpha printed with two decimals.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    format!("rgba({}, {})", hex_to_rgb(hex), to_fixed(alpha, 2))
}

/// Append an alpha byte to a hex color, e.g. `#000000` at 15% becomes
/// `#00000026`. Colors not starting with `#` are returned unchanged.
pub fn hex_with_alpha_byte(color: &str, opacity: f64) -> String {
    if !color.starts_with('#') {
        return color.to_string();
    }
    let byte = crate::number::js_round(opacity / 100.0 * 255.0);
    format!("{color}{}", hex_byte(byte))
}

/// Lowercase hex of an integer, padded to two characters.
fn hex_byte(value: f64) -> String {
    let digits = if !value.is_finite() {
        JsNumber(value).to_string()
    } else if value < 0.0 {
        format!("-{:x}", (-value) as u64)
    } else {
        format!("{:x}", value as u64)
    };
    format!("{digits:0>2}")
}
