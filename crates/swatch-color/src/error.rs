//! Error types for color parsing and validated conversion.

use std::fmt;

/// Result alias used throughout `swatch-color`.
pub type Result<T> = std::result::Result<T, ColorError>;

/// A single component of an HSL or RGBA color, named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Hue,
    Saturation,
    Lightness,
    Red,
    Green,
    Blue,
    Alpha,
}

impl Component {
    /// Lowercase name as it appears in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything that can go wrong converting a color.
///
/// Only [`ColorError::MalformedHexColor`] can come out of the unchecked
/// conversions. [`ColorError::InvalidColorComponent`] is produced by the
/// `try_*` variants, which range-check their numeric inputs instead of
/// passing garbage through.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The string is not an optional `#` followed by exactly six hex digits.
    #[error("malformed hex color: {input:?} (expected `#rrggbb` or `rrggbb`)")]
    MalformedHexColor { input: String },

    /// A numeric component fell outside its domain.
    #[error("invalid {component} component: {value} (expected {expected})")]
    InvalidColorComponent {
        component: Component,
        value: f64,
        expected: &'static str,
    },

    /// The string is not a recognizable `hsl(...)` or `h s l` triple.
    #[error("malformed hsl color: {input:?} (expected `hsl(h s% l%)` or `h s l`)")]
    MalformedHslColor { input: String },
}

impl ColorError {
    pub(crate) fn malformed_hex(input: &str) -> Self {
        Self::MalformedHexColor {
            input: input.to_owned(),
        }
    }

    pub(crate) fn malformed_hsl(input: &str) -> Self {
        Self::MalformedHslColor {
            input: input.to_owned(),
        }
    }
}
