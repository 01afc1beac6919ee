//! # swatch-motion: easing, tweens and transition presets
//!
//! Everything here is clock-agnostic. A [`Tween`] answers "what is the value
//! at elapsed time `t`"; an [`Animator`] tracks start/stop state for a host
//! loop that supplies `Instant`s; [`transition`] holds the stock fade, scale
//! and slide presets.

pub mod animator;
pub mod easing;
pub mod transition;
pub mod tween;

pub use animator::{Animator, AnimatorState};
pub use easing::Easing;
pub use transition::{
    Direction, Offset, Preset, Rect, fade_in, fade_out, scale_in, scale_out, slide_in, slide_out,
};
pub use tween::{Frame, Frames, Lerp, MAX_FPS, Tween};
