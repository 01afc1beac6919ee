// SPDX-License-Identifier: MIT
//
// HSL ↔ RGB ↔ hex conversion functions.
//
// The HSL → RGB transform is the classic two-anchor form:
//
//   m2 = l·(1+s)        if l <= 0.5
//      = l + s − l·s    otherwise
//   m1 = 2l − m2
//
// and each channel samples a piecewise-linear ramp between m1 and m2 at
// hue + 1/3, hue, hue − 1/3 (red, green, blue). Published palettes were
// produced by exactly this float sequence followed by truncation, so the
// arithmetic below is written out step for step. No fused multiply-add,
// no reordering: either one moves a channel across an integer boundary
// for some inputs (e.g. hsl(60 100% 50%) must give red 254, not 255).
#![allow(clippy::suboptimal_flops)]

use tracing::trace;

use crate::error::{ColorError, Component, Result};
use crate::hsl::Hsl;
use crate::rgb::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert HSL (degrees, percent, percent) to 8-bit RGB.
///
/// Hue wraps modulo 360. Channels are scaled by 255 and truncated toward
/// zero. Inputs are not range-checked: out-of-domain saturation or lightness
/// produce saturated channels rather than errors. Use [`try_hsl_to_rgb`] to
/// reject them.
///
/// ```
/// use swatch_color::{hsl_to_rgb, Rgb};
///
/// assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
/// assert_eq!(hsl_to_rgb(222.2, 47.4, 11.2), Rgb::new(15, 23, 42));
/// ```
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let (r, g, b) = hsl_to_unit_rgb(h / 360.0, s / 100.0, l / 100.0);
    Rgb::new(truncate_channel(r), truncate_channel(g), truncate_channel(b))
}

/// Range-checked [`hsl_to_rgb`].
///
/// # Errors
///
/// [`ColorError::InvalidColorComponent`] if the hue is not finite, or if
/// saturation or lightness is outside `0..=100` (NaN included).
pub fn try_hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Rgb> {
    if !h.is_finite() {
        return Err(invalid(Component::Hue, h, "a finite angle in degrees"));
    }
    if !(0.0..=100.0).contains(&s) {
        return Err(invalid(Component::Saturation, s, "0..=100"));
    }
    if !(0.0..=100.0).contains(&l) {
        return Err(invalid(Component::Lightness, l, "0..=100"));
    }
    Ok(hsl_to_rgb(h, s, l))
}

/// HSL with every component in `[0, 1]` → unit RGB, before scaling.
fn hsl_to_unit_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        hue_ramp(m1, m2, h + ONE_THIRD),
        hue_ramp(m1, m2, h),
        hue_ramp(m1, m2, h - ONE_THIRD),
    )
}

/// Sample one channel's ramp at `hue` (in turns, wrapped into `[0, 1)`).
fn hue_ramp(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Scale a unit channel to 0–255, truncating toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_channel(v: f64) -> u8 {
    // `as` truncates toward zero and saturates at the u8 bounds (NaN → 0).
    (v * 255.0) as u8
}

// ─── RGB ↔ Hex ───────────────────────────────────────────────────────────────

/// Format 8-bit channels as lowercase `#rrggbb`.
///
/// ```
/// assert_eq!(swatch_color::rgb_to_hex(255, 87, 51), "#ff5733");
/// ```
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// [`rgb_to_hex`] for untyped integers.
///
/// # Errors
///
/// [`ColorError::InvalidColorComponent`] naming the first channel outside
/// `0..=255`.
pub fn try_rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String> {
    let r = channel(Component::Red, r)?;
    let g = channel(Component::Green, g)?;
    let b = channel(Component::Blue, b)?;
    Ok(rgb_to_hex(r, g, b))
}

#[allow(clippy::cast_precision_loss)]
fn channel(component: Component, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| invalid(component, value as f64, "0..=255"))
}

/// Parse `#rrggbb` (the `#` is optional) into channels.
///
/// # Errors
///
/// [`ColorError::MalformedHexColor`] unless the input is exactly six hex
/// digits after an optional leading `#`.
///
/// ```
/// use swatch_color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#ff5733").unwrap(), Rgb::new(255, 87, 51));
/// assert!(hex_to_rgb("#abc").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).inspect_err(|err| trace!(%err, "hex parse failed"))
}

// ─── Composites ──────────────────────────────────────────────────────────────

/// [`hsl_to_rgb`] followed by [`rgb_to_hex`]. Nothing else.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let Rgb { r, g, b } = hsl_to_rgb(h, s, l);
    rgb_to_hex(r, g, b)
}

/// Shift lightness by `amount` percentage points, clamped to `[0, 100]`.
///
/// Hue and saturation pass through untouched; in particular hue is not
/// normalized here even though it wraps during conversion.
#[must_use]
pub fn adjust_lightness(h: f64, s: f64, l: f64, amount: f64) -> Hsl {
    Hsl::new(h, s, (l + amount).clamp(0.0, 100.0))
}

/// Parse a hex color and render it as `rgba(r, g, b, alpha)`.
///
/// Alpha is printed as-is (`0.5`, not `0.50`) and is not range-checked.
///
/// # Errors
///
/// [`ColorError::MalformedHexColor`] if `hex` does not parse.
///
/// ```
/// assert_eq!(
///     swatch_color::adjust_alpha("#ff5733", 0.5).unwrap(),
///     "rgba(255, 87, 51, 0.5)",
/// );
/// ```
pub fn adjust_alpha(hex: &str, alpha: f64) -> Result<String> {
    Ok(hex_to_rgb(hex)?.to_rgba_string(alpha))
}

fn invalid(component: Component, value: f64, expected: &'static str) -> ColorError {
    ColorError::InvalidColorComponent {
        component,
        value,
        expected,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    // ── Known values ─────────────────────────────────────────────────────

    #[test_case(0.0, 100.0, 50.0, (255, 0, 0) ; "red")]
    #[test_case(120.0, 100.0, 50.0, (0, 255, 0) ; "green")]
    #[test_case(240.0, 100.0, 50.0, (0, 0, 255) ; "blue")]
    #[test_case(60.0, 100.0, 50.0, (254, 255, 0) ; "yellow truncates red")]
    #[test_case(0.0, 0.0, 50.0, (127, 127, 127) ; "mid gray truncates")]
    #[test_case(0.0, 100.0, 25.0, (127, 0, 0) ; "dark red")]
    #[test_case(30.0, 50.0, 75.0, (223, 191, 159) ; "light tan")]
    #[test_case(222.2, 84.0, 4.9, (1, 8, 22) ; "slate foreground")]
    #[test_case(222.2, 47.4, 11.2, (15, 23, 42) ; "slate primary")]
    #[test_case(215.4, 16.3, 46.9, (100, 116, 139) ; "muted foreground")]
    #[test_case(0.0, 84.2, 60.2, (238, 68, 68) ; "destructive")]
    fn hsl_to_rgb_known(h: f64, s: f64, l: f64, expected: (u8, u8, u8)) {
        assert_eq!(hsl_to_rgb(h, s, l).to_tuple(), expected);
    }

    #[test_case(360.0, (255, 0, 0) ; "full turn")]
    #[test_case(480.0, (0, 255, 0) ; "one and a third turns")]
    #[test_case(-120.0, (0, 0, 255) ; "negative hue")]
    fn hue_wraps(h: f64, expected: (u8, u8, u8)) {
        assert_eq!(hsl_to_rgb(h, 100.0, 50.0).to_tuple(), expected);
    }

    // ── Properties ───────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_gray() {
        for h in (0..360).step_by(7) {
            for l in 0..=100 {
                let c = hsl_to_rgb(f64::from(h), 0.0, f64::from(l));
                assert!(c.is_gray(), "hsl({h} 0% {l}%) gave {c:?}");
            }
        }
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        for h in (0..360).step_by(5) {
            for s in (0..=100).step_by(10) {
                let (h, s) = (f64::from(h), f64::from(s));
                assert_eq!(hsl_to_rgb(h, s, 0.0), Rgb::BLACK, "h={h} s={s}");
                assert_eq!(hsl_to_rgb(h, s, 100.0), Rgb::WHITE, "h={h} s={s}");
            }
        }
    }

    #[test]
    fn hex_roundtrip_every_channel_value() {
        for v in 0..=255u8 {
            for (r, g, b) in [(v, 0, 0), (0, v, 0), (0, 0, v), (v, v, v), (v, 255 - v, v / 3)] {
                let hex = rgb_to_hex(r, g, b);
                assert_eq!(hex_to_rgb(&hex), Ok(Rgb::new(r, g, b)), "{hex}");
            }
        }
    }

    #[test]
    fn hsl_to_hex_is_composition() {
        for h in (0..360).step_by(11) {
            for s in (0..=100).step_by(9) {
                for l in (0..=100).step_by(7) {
                    let (h, s, l) = (f64::from(h) + 0.3, f64::from(s), f64::from(l) + 0.1);
                    let Rgb { r, g, b } = hsl_to_rgb(h, s, l);
                    assert_eq!(hsl_to_hex(h, s, l), rgb_to_hex(r, g, b));
                }
            }
        }
    }

    #[test]
    fn out_of_domain_inputs_do_not_panic() {
        let _ = hsl_to_rgb(f64::NAN, 50.0, 50.0);
        let _ = hsl_to_rgb(10.0, 250.0, 50.0);
        assert_eq!(hsl_to_rgb(10.0, 50.0, 400.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(10.0, 50.0, -20.0), Rgb::BLACK);
    }

    // ── Literals ─────────────────────────────────────────────────────────

    #[test]
    fn literal_scenarios() {
        assert_eq!(rgb_to_hex(255, 87, 51), "#ff5733");
        assert_eq!(hex_to_rgb("#ff5733"), Ok(Rgb::new(255, 87, 51)));
        assert_eq!(hsl_to_hex(222.2, 84.0, 4.9), "#010816");
        assert_eq!(
            adjust_alpha("#ff5733", 0.5).as_deref(),
            Ok("rgba(255, 87, 51, 0.5)")
        );
    }

    // ── Lightness ────────────────────────────────────────────────────────

    #[test]
    fn adjust_lightness_shifts_only_lightness() {
        let adjusted = adjust_lightness(222.2, 84.0, 4.9, 10.0);
        assert_eq!(adjusted.h, 222.2);
        assert_eq!(adjusted.s, 84.0);
        assert!((adjusted.l - 14.9).abs() < 1e-9, "l = {}", adjusted.l);
    }

    #[test]
    fn adjust_lightness_clamps() {
        assert_eq!(adjust_lightness(10.0, 20.0, 100.0, 50.0), Hsl::new(10.0, 20.0, 100.0));
        assert_eq!(adjust_lightness(10.0, 20.0, 0.0, -50.0), Hsl::new(10.0, 20.0, 0.0));
        assert_eq!(adjust_lightness(10.0, 20.0, 30.0, -100.0), Hsl::new(10.0, 20.0, 0.0));
    }

    #[test]
    fn adjust_lightness_leaves_hue_unwrapped() {
        assert_eq!(adjust_lightness(400.0, 20.0, 30.0, 5.0).h, 400.0);
    }

    // ── Errors ───────────────────────────────────────────────────────────

    #[test]
    fn hex_to_rgb_rejects_malformed() {
        for bad in ["zzzzzz", "#abc"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(ColorError::MalformedHexColor { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn adjust_alpha_propagates_malformed_hex() {
        assert!(matches!(
            adjust_alpha("#12345", 0.5),
            Err(ColorError::MalformedHexColor { .. })
        ));
    }

    #[test]
    fn try_rgb_to_hex_range_checks() {
        assert_eq!(try_rgb_to_hex(255, 87, 51).as_deref(), Ok("#ff5733"));
        assert_eq!(
            try_rgb_to_hex(0, 256, -1),
            Err(ColorError::InvalidColorComponent {
                component: Component::Green,
                value: 256.0,
                expected: "0..=255",
            })
        );
        assert!(matches!(
            try_rgb_to_hex(0, 0, -1),
            Err(ColorError::InvalidColorComponent {
                component: Component::Blue,
                ..
            })
        ));
    }

    #[test_case(f64::NAN, 50.0, 50.0, Component::Hue ; "nan hue")]
    #[test_case(f64::INFINITY, 50.0, 50.0, Component::Hue ; "infinite hue")]
    #[test_case(10.0, 100.5, 50.0, Component::Saturation ; "saturation high")]
    #[test_case(10.0, f64::NAN, 50.0, Component::Saturation ; "nan saturation")]
    #[test_case(10.0, 50.0, -0.1, Component::Lightness ; "lightness low")]
    fn try_hsl_to_rgb_rejects(h: f64, s: f64, l: f64, expected: Component) {
        match try_hsl_to_rgb(h, s, l) {
            Err(ColorError::InvalidColorComponent { component, .. }) => {
                assert_eq!(component, expected);
            }
            other => panic!("expected InvalidColorComponent, got {other:?}"),
        }
    }

    #[test]
    fn try_hsl_to_rgb_accepts_wrapping_hue() {
        assert_eq!(try_hsl_to_rgb(-120.0, 100.0, 50.0), Ok(Rgb::new(0, 0, 255)));
        assert_eq!(try_hsl_to_rgb(222.2, 47.4, 11.2), Ok(Rgb::new(15, 23, 42)));
    }
}
