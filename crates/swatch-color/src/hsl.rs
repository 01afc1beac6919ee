//! HSL colors as authored in palettes: hue in degrees, saturation and
//! lightness in percent.
//!
//! The text form is the CSS Color 4 space-separated syntax used by most
//! design-token sources, `hsl(222.2 84% 4.9%)`. The legacy comma form and a
//! bare `222.2 84 4.9` triple are accepted on input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::convert::{adjust_lightness, hsl_to_hex, hsl_to_rgb, try_hsl_to_rgb};
use crate::error::{ColorError, Result};
use crate::rgb::Rgb;

/// An HSL color. Serializes as a `[h, s, l]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64, f64)", into = "(f64, f64, f64)")]
pub struct Hsl {
    /// Hue in degrees. Wraps modulo 360 during conversion.
    pub h: f64,
    /// Saturation, 0–100.
    pub s: f64,
    /// Lightness, 0–100.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Range-checked [`Hsl::to_rgb`].
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorComponent`] for a non-finite hue or a
    /// saturation/lightness outside `0..=100`.
    pub fn try_to_rgb(self) -> Result<Rgb> {
        try_hsl_to_rgb(self.h, self.s, self.l)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// Raise lightness by `amount` points (clamped at 100).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        adjust_lightness(self.h, self.s, self.l, amount)
    }

    /// Lower lightness by `amount` points (clamped at 0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        adjust_lightness(self.h, self.s, self.l, -amount)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}

impl From<(f64, f64, f64)> for Hsl {
    fn from((h, s, l): (f64, f64, f64)) -> Self {
        Self::new(h, s, l)
    }
}

impl From<Hsl> for (f64, f64, f64) {
    fn from(hsl: Hsl) -> Self {
        (hsl.h, hsl.s, hsl.l)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

const NUM: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)";

/// `hsl(H[deg] S% L%)` with space or comma separators, or a bare `H S L`.
static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let sep = r"(?:\s*,\s*|\s+)";
    let pattern = format!(
        r"^\s*(?:hsl\(\s*(?P<h1>{NUM})(?:deg)?{sep}(?P<s1>{NUM})%?{sep}(?P<l1>{NUM})%?\s*\)|(?P<h2>{NUM}){sep}(?P<s2>{NUM})%?{sep}(?P<l2>{NUM})%?)\s*$"
    );
    Regex::new(&pattern).expect("Invalid HSL regex")
});

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = HSL_REGEX
            .captures(s)
            .ok_or_else(|| ColorError::malformed_hsl(s))?;
        let field = |a: &str, b: &str| -> Result<f64> {
            caps.name(a)
                .or_else(|| caps.name(b))
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| ColorError::malformed_hsl(s))
        };
        Ok(Self::new(
            field("h1", "h2")?,
            field("s1", "s2")?,
            field("l1", "l2")?,
        ))
    }
}
