//! A stateful driver for a [`Tween`], ticked by the host's own loop.
//!
//! The host owns the clock: it passes `Instant`s into [`Animator::start`] and
//! [`Animator::tick`], so the animator never sleeps or spawns. An animator
//! can be stopped and started again; starting one that is already running
//! does nothing.

use std::time::Instant;

use tracing::debug;

use crate::tween::{Lerp, Tween};

/// Where an [`Animator`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running { started: Instant },
    Finished,
    Stopped,
}

/// Drives one tween from host ticks.
#[derive(Debug, Clone)]
pub struct Animator<T> {
    tween: Tween<T>,
    state: AnimatorState,
}

impl<T: Lerp> Animator<T> {
    #[must_use]
    pub const fn new(tween: Tween<T>) -> Self {
        Self {
            tween,
            state: AnimatorState::Idle,
        }
    }

    #[must_use]
    pub const fn tween(&self) -> &Tween<T> {
        &self.tween
    }

    #[must_use]
    pub const fn state(&self) -> AnimatorState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running { .. })
    }

    /// Begin at `now`. No-op while already running.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        debug!(duration_ms = self.tween.duration.as_millis(), easing = %self.tween.easing, "animator started");
        self.state = AnimatorState::Running { started: now };
    }

    /// Halt without reaching the end. No-op unless running.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("animator stopped");
            self.state = AnimatorState::Stopped;
        }
    }

    /// Advance to `now`, passing the current value to `on_frame`.
    ///
    /// Returns `true` while more frames are expected. The tick that reaches
    /// the end delivers exactly `to` and returns `false`. Ticks while not
    /// running deliver nothing.
    pub fn tick(&mut self, now: Instant, mut on_frame: impl FnMut(T)) -> bool {
        let AnimatorState::Running { started } = self.state else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        on_frame(self.tween.value_at(elapsed));
        if self.tween.is_finished(elapsed) {
            self.state = AnimatorState::Finished;
            return false;
        }
        true
    }
}
