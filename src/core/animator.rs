//! Time-based smooth scroll with quadratic ease-in-out.
//!
//! The animator is a two-state machine: idle, or animating from a start
//! offset to an end offset over a fixed duration.  Each host frame asks it
//! for the offset to write; once the duration has elapsed it returns the end
//! offset exactly and goes idle.

use std::time::{Duration, Instant};

/// Quadratic ease-in-out over raw time values.
///
/// `elapsed` and `duration` share a unit (milliseconds in practice).
/// `ease_in_out_quad(0, b, c, d) == b` and `ease_in_out_quad(d, b, c, d) == b + c`.
pub fn ease_in_out_quad(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    let mut t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return delta / 2.0 * t * t + start;
    }
    t -= 1.0;
    -delta / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// One in-flight animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub start_offset: f64,
    pub end_offset: f64,
    pub started_at: Instant,
    pub duration: Duration,
}

impl AnimationState {
    /// Offset `elapsed_ms` into the animation.  At or past the duration this
    /// is exactly `end_offset`.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        if elapsed_ms >= duration_ms {
            return self.end_offset;
        }
        ease_in_out_quad(
            elapsed_ms,
            self.start_offset,
            self.end_offset - self.start_offset,
            duration_ms,
        )
    }

    fn elapsed_ms(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0
    }
}

/// Idle / animating state machine.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    active: Option<AnimationState>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `from → to`, discarding any running animation.
    ///
    /// Returns `false` (and stays idle) when there is nowhere to go.
    pub fn start(&mut self, from: f64, to: f64, duration: Duration, now: Instant) -> bool {
        self.active = None;
        if from == to {
            return false;
        }
        self.active = Some(AnimationState {
            start_offset: from,
            end_offset: to,
            started_at: now,
            duration,
        });
        true
    }

    /// Advance to `now`.  Returns the offset to write this frame, or `None`
    /// when idle.
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        let anim = self.active?;
        let elapsed = anim.elapsed_ms(now);
        let offset = anim.position_at(elapsed);
        if elapsed >= anim.duration.as_secs_f64() * 1000.0 {
            self.active = None;
        }
        Some(offset)
    }

    /// Drop the running animation.  The offset stays wherever the last frame
    /// put it.
    pub fn stop(&mut self) {
        self.active = None;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&AnimationState> {
        self.active.as_ref()
    }
}
