//! 8-bit RGB colors and their `#rrggbb` text form.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// An opaque 8-bit sRGB color.
///
/// Channel types make out-of-range values unrepresentable; untyped integer
/// input goes through [`crate::try_rgb_to_hex`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (either case).
    ///
    /// # Errors
    ///
    /// [`ColorError::MalformedHexColor`] unless the input, after one optional
    /// leading `#`, is exactly six hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::malformed_hex(s))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with `a` printed in its natural decimal form.
    #[must_use]
    pub fn to_rgba_string(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(alpha)
        )
    }

    /// Whether all three channels are equal.
    #[inline]
    #[must_use]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        rgb.to_tuple()
    }
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Shortest round-trip decimal that always carries a fractional part:
/// `0.5`, `1.0`, `0.25`. Consumers compare these strings byte for byte.
///
/// Below `1e-4` and from `1e16` up the value switches to exponent form with
/// a signed, at least two-digit exponent (`1e-05`, `2.5e+16`). Non-finite
/// values print as `inf`, `-inf` and `nan`.
pub(crate) fn format_alpha(alpha: f64) -> String {
    if alpha.is_nan() {
        return "nan".to_owned();
    }
    let repr = format!("{alpha:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
