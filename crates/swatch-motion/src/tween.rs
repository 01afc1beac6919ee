// SPDX-License-Identifier: MIT
//
// Tweening: interpolate a value over a duration through an easing curve.
//
// A Tween is pure data: ask it for the value at any elapsed time. Frame
// generation is deterministic (frames()) so hosts and tests can step
// through an animation without a clock. play() is the one blocking
// convenience that sleeps between frames and hands each value to a
// callback, for hosts that just want "run this on my thread".
//
//   elapsed ──÷ duration──▶ progress ──easing──▶ eased ──lerp──▶ value

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::easing::Easing;

/// Highest sampling rate [`Tween::frames`] honors: one frame per nanosecond.
pub const MAX_FPS: u32 = 1_000_000_000;

// ─── Lerp ────────────────────────────────────────────────────────────────────

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// `self` at `t = 0`, `to` at `t = 1`. `t` may leave `[0, 1]`.
    #[must_use]
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    #[inline]
    fn lerp(self, to: Self, t: f64) -> Self {
        (to - self).mul_add(t, self)
    }
}

// ─── Frame ───────────────────────────────────────────────────────────────────

/// One sampled step of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<T> {
    /// 0-based frame number.
    pub index: u32,
    /// Time since the tween started.
    pub elapsed: Duration,
    pub value: T,
}

// ─── Tween ───────────────────────────────────────────────────────────────────

/// An interpolation from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    #[must_use]
    pub const fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Same endpoints swapped, same timing.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..self
        }
    }

    #[must_use]
    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }

    /// Linear progress in `[0, 1]`. A zero duration is always complete.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The eased value at `elapsed`. Exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> T {
        if self.is_finished(elapsed) {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress(elapsed)))
    }

    /// Sample the tween at `fps` frames per second.
    ///
    /// The first frame is at `0`, the last exactly at `duration` with value
    /// `to`. A zero duration yields one frame. `fps` is clamped to
    /// `1..=MAX_FPS`.
    #[must_use]
    pub fn frames(&self, fps: u32) -> Frames<T> {
        let fps = fps.clamp(1, MAX_FPS);
        let interval = Duration::from_secs(1) / fps;
        let count = frame_count(self.duration, interval);
        Frames {
            tween: *self,
            interval,
            next: 0,
            count,
        }
    }

    /// Run the tween in real time on the calling thread, invoking
    /// `on_frame` once per frame. Blocks for roughly `duration`, or until
    /// `on_frame` breaks, whose value is then returned.
    pub fn play<B>(
        &self,
        fps: u32,
        mut on_frame: impl FnMut(&Frame<T>) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let start = Instant::now();
        for frame in self.frames(fps) {
            let due = start + frame.elapsed;
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
            trace!(index = frame.index, elapsed_ms = frame.elapsed.as_millis(), "frame");
            if let ControlFlow::Break(value) = on_frame(&frame) {
                return ControlFlow::Break(value);
            }
        }
        ControlFlow::Continue(())
    }
}

/// Frames needed to cover `duration` at `interval`, inclusive of frame 0.
fn frame_count(duration: Duration, interval: Duration) -> u32 {
    if duration.is_zero() {
        return 1;
    }
    let steps = duration.as_nanos().div_ceil(interval.as_nanos());
    u32::try_from(steps).map_or(u32::MAX, |s| s.saturating_add(1))
}

// ─── Frames ──────────────────────────────────────────────────────────────────

/// Iterator returned by [`Tween::frames`].
#[derive(Debug, Clone)]
pub struct Frames<T> {
    tween: Tween<T>,
    interval: Duration,
    next: u32,
    count: u32,
}

impl<T: Lerp> Iterator for Frames<T> {
    type Item = Frame<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let elapsed = if self.next == self.count {
            self.tween.duration
        } else {
            (self.interval * index).min(self.tween.duration)
        };
        Some(Frame {
            index,
            elapsed,
            value: self.tween.value_at(elapsed),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.next) as usize;
        (left, Some(left))
    }
}

impl<T: Lerp> ExactSizeIterator for Frames<T> {}

// ─── Tests ───────────────────────────────────────────────────────────────────
