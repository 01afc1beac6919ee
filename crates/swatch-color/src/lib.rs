// SPDX-License-Identifier: MIT
//
// swatch-color: HSL, RGB, and hex color conversion.
//
// The whole crate is a handful of pure functions. Every palette in
// swatch-theme is stored as HSL and flattened to hex strings through
// here, so the conversion must stay bit-identical to the palettes that
// were already published:
//
//   HSL (deg, %, %) ──hsl_to_rgb──▶ RGB (u8 ×3) ──rgb_to_hex──▶ "#rrggbb"
//                                        ▲                         │
//                                        └────────hex_to_rgb───────┘
//
// Channels are truncated toward zero after scaling by 255, never rounded.
// That is what the published hex values were computed with.

// Single-character variable names (h, s, l, r, g, b) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]

pub mod convert;
pub mod error;
pub mod hsl;
pub mod rgb;

pub use convert::{
    adjust_alpha, adjust_lightness, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex,
    try_hsl_to_rgb, try_rgb_to_hex,
};
pub use error::{ColorError, Component, Result};
pub use hsl::Hsl;
pub use rgb::Rgb;
