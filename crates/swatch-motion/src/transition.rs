//! Stock transitions: fade, scale, and slide.
//!
//! Each preset is just a [`Tween`] with the conventional endpoints. Entrances
//! decelerate (`OutCubic`), exits accelerate (`InCubic`). What the value
//! drives (opacity, a scale factor, a position offset) is up to the host.

use std::ops::{Add, Mul, Sub};
use std::time::Duration;

use crate::easing::Easing;
use crate::tween::{Lerp, Tween};

/// Default length of every preset.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Default travel of a slide, in pixels.
pub const DEFAULT_DISTANCE: f64 = 50.0;

/// Scale factor a modal starts from when scaling in.
pub const SCALE_FROM: f64 = 0.95;

// ─── Offset ──────────────────────────────────────────────────────────────────

/// A 2D displacement from a widget's resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Lerp for Offset {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// Screen direction. `Up` is toward smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector pointing in this direction.
    #[must_use]
    pub const fn unit(self) -> Offset {
        match self {
            Self::Up => Offset::new(0.0, -1.0),
            Self::Down => Offset::new(0.0, 1.0),
            Self::Left => Offset::new(-1.0, 0.0),
            Self::Right => Offset::new(1.0, 0.0),
        }
    }
}

// ─── Presets ─────────────────────────────────────────────────────────────────

/// Opacity 0 → 1.
#[must_use]
pub const fn fade_in() -> Tween<f64> {
    Tween::new(0.0, 1.0, DEFAULT_DURATION, Easing::OutCubic)
}

/// Opacity 1 → 0.
#[must_use]
pub const fn fade_out() -> Tween<f64> {
    Tween::new(1.0, 0.0, DEFAULT_DURATION, Easing::InCubic)
}

/// Scale 0.95 → 1.
#[must_use]
pub const fn scale_in() -> Tween<f64> {
    Tween::new(SCALE_FROM, 1.0, DEFAULT_DURATION, Easing::OutCubic)
}

/// Scale 1 → 0.95.
#[must_use]
pub const fn scale_out() -> Tween<f64> {
    Tween::new(1.0, SCALE_FROM, DEFAULT_DURATION, Easing::InCubic)
}

/// Arrive at rest while moving in `direction`, starting `distance` away.
///
/// Sliding in *up* starts below the resting position.
#[must_use]
pub fn slide_in(direction: Direction, distance: f64) -> Tween<Offset> {
    Tween::new(
        Offset::ZERO - direction.unit() * distance,
        Offset::ZERO,
        DEFAULT_DURATION,
        Easing::OutCubic,
    )
}

/// Leave rest, moving `distance` in `direction`.
#[must_use]
pub fn slide_out(direction: Direction, distance: f64) -> Tween<Offset> {
    Tween::new(
        Offset::ZERO,
        direction.unit() * distance,
        DEFAULT_DURATION,
        Easing::InCubic,
    )
}

// ─── Preset lookup ───────────────────────────────────────────────────────────

/// A named preset, for hosts that configure transitions by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    FadeIn,
    FadeOut,
    ScaleIn,
    ScaleOut,
    SlideIn(Direction),
    SlideOut(Direction),
}

impl Preset {
    /// Parse `fade-in`, `scale-out`, `slide-in-up`, `slide-out-left`, ...
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let direction = |s: &str| match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        };
        match name {
            "fade-in" => Some(Self::FadeIn),
            "fade-out" => Some(Self::FadeOut),
            "scale-in" => Some(Self::ScaleIn),
            "scale-out" => Some(Self::ScaleOut),
            _ => {
                if let Some(rest) = name.strip_prefix("slide-in-") {
                    direction(rest).map(Self::SlideIn)
                } else if let Some(rest) = name.strip_prefix("slide-out-") {
                    direction(rest).map(Self::SlideOut)
                } else {
                    None
                }
            }
        }
    }

    /// Every preset name [`from_name`](Self::from_name) accepts.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &[
            "fade-in",
            "fade-out",
            "scale-in",
            "scale-out",
            "slide-in-up",
            "slide-in-down",
            "slide-in-left",
            "slide-in-right",
            "slide-out-up",
            "slide-out-down",
            "slide-out-left",
            "slide-out-right",
        ]
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────────

/// An integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale the size by `scale`, keeping the center fixed.
    ///
    /// New width and height truncate toward zero; the origin shifts by half
    /// the size difference, rounded toward negative infinity.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scaled_about_center(self, scale: f64) -> Self {
        let width = (f64::from(self.width) * scale) as i32;
        let height = (f64::from(self.height) * scale) as i32;
        Self {
            x: self.x + (self.width - width).div_euclid(2),
            y: self.y + (self.height - height).div_euclid(2),
            width,
            height,
        }
    }
}
