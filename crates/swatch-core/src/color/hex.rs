//! Hexadecimal color codec
//!
//! Accepted input is an optional single `#` followed by exactly three or six
//! hexadecimal digits, in any case. The three digit form doubles every
//! digit (`F00` is `FF0000`). Output is always `#RRGGBB` in uppercase.
//!
//! Whitespace is not trimmed: `" #FFF"` is rejected, so that
//! [`is_complete_hex`] and [`parse`] always agree.

use std::fmt;
use std::str::FromStr;

use super::rgba::Color;
use crate::error::ParseColorError;

/// Maximum number of digits in a hex color.
pub const MAX_HEX_DIGITS: usize = 6;

/// Split off one optional leading '#'. Returns the digits and their
/// character offset in the original string.
#[inline]
fn split_prefix(s: &str) -> (&str, usize) {
    match s.strip_prefix('#') {
        Some(rest) => (rest, 1),
        None => (s, 0),
    }
}

/// Parse a hex color string.
///
/// Supported forms: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`. Alpha is 1.0.
///
/// # Errors
///
/// - [`ParseColorError::InvalidCharacter`] for any non-hex character,
///   including a second `#`
/// - [`ParseColorError::InvalidLength`] when the digit count is not 3 or 6
///
/// # Example
/// ```
/// use swatch_core::{hex, Color};
///
/// assert_eq!(hex::parse("#f00").unwrap(), Color::rgb(1.0, 0.0, 0.0));
/// assert!(hex::parse("##FF0000").is_err());
/// ```
pub fn parse(s: &str) -> Result<Color, ParseColorError> {
    let (digits, offset) = split_prefix(s);

    let mut nibbles = [0u8; MAX_HEX_DIGITS];
    let mut len = 0;
    for (i, ch) in digits.chars().enumerate() {
        let value = ch.to_digit(16).ok_or(ParseColorError::InvalidCharacter {
            ch,
            position: i + offset,
        })?;
        if len < MAX_HEX_DIGITS {
            nibbles[len] = value as u8;
        }
        len += 1;
    }

    match len {
        // 0xF * 17 = 0xFF
        3 => Ok(Color::from_u8(
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
        )),
        6 => Ok(Color::from_u8(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        )),
        _ => Err(ParseColorError::InvalidLength { len }),
    }
}

/// Returns true if `s` is a complete hex color, i.e. [`parse`] succeeds.
pub fn is_complete_hex(s: &str) -> bool {
    let (digits, _) = split_prefix(s);
    let mut len = 0;
    for ch in digits.chars() {
        if !ch.is_ascii_hexdigit() {
            return false;
        }
        len += 1;
    }
    len == 3 || len == 6
}

/// Returns true if `s` could still become a hex color by appending digits.
///
/// Used to validate input while it is being typed: the empty string and a
/// lone `#` are accepted, anything longer than six digits is not.
///
/// # Example
/// ```
/// use swatch_core::hex;
///
/// assert!(hex::is_partial_hex(""));
/// assert!(hex::is_partial_hex("#FF0"));
/// assert!(!hex::is_partial_hex("FF00000"));
/// assert!(!hex::is_partial_hex("##"));
/// ```
pub fn is_partial_hex(s: &str) -> bool {
    let (digits, _) = split_prefix(s);
    let mut len = 0;
    for ch in digits.chars() {
        if !ch.is_ascii_hexdigit() {
            return false;
        }
        len += 1;
    }
    len <= MAX_HEX_DIGITS
}

/// Format a color as `#RRGGBB` (uppercase).
///
/// Channels are rounded half away from zero and clamped, see
/// [`Color::to_bytes`].
pub fn format(color: Color) -> String {
    let [r, g, b] = color.to_bytes();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Canonical `#RRGGBB` form of a valid hex string.
///
/// ```
/// use swatch_core::hex;
/// assert_eq!(hex::normalize("abc").unwrap(), "#AABBCC");
/// ```
pub fn normalize(s: &str) -> Result<String, ParseColorError> {
    parse(s).map(format)
}

impl Color {
    /// Hex representation of this color, `#RRGGBB`.
    #[inline]
    pub fn to_hex(self) -> String {
        format(self)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}
