//! Easing curves: maps from linear progress `t ∈ [0, 1]` to eased progress.

use std::fmt;

/// A timing curve.
///
/// Every curve clamps its input to `[0, 1]` and maps `0 → 0`, `1 → 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Easing {
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
    ];

    /// Apply the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t).powi(2),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Kebab-case name (`out-cubic`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in-quad",
            Self::OutQuad => "out-quad",
            Self::InOutQuad => "in-out-quad",
            Self::InCubic => "in-cubic",
            Self::OutCubic => "out-cubic",
            Self::InOutCubic => "in-out-cubic",
        }
    }

    /// Look up a curve by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert!(approx_eq(easing.apply(0.0), 0.0), "{easing} at 0");
            assert!(approx_eq(easing.apply(1.0), 1.0), "{easing} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in Easing::ALL {
            assert!(approx_eq(easing.apply(-3.0), 0.0), "{easing} below");
            assert!(approx_eq(easing.apply(7.0), 1.0), "{easing} above");
            assert!(approx_eq(easing.apply(f64::NAN), 0.0), "{easing} nan");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v >= prev, "{easing} decreased at {i}");
                prev = v;
            }
        }
    }

    #[test_case(Easing::Linear, 0.5)]
    #[test_case(Easing::InQuad, 0.25)]
    #[test_case(Easing::OutQuad, 0.75)]
    #[test_case(Easing::InOutQuad, 0.5)]
    #[test_case(Easing::InCubic, 0.125)]
    #[test_case(Easing::OutCubic, 0.875)]
    #[test_case(Easing::InOutCubic, 0.5)]
    fn midpoint(easing: Easing, expected: f64) {
        assert!(approx_eq(easing.apply(0.5), expected), "{easing}: {}", easing.apply(0.5));
    }

    #[test]
    fn names_roundtrip() {
        for easing in Easing::ALL {
            assert_eq!(Easing::from_name(easing.name()), Some(easing));
        }
        assert_eq!(Easing::from_name("bounce"), None);
    }
}
