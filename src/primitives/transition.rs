//! Time-based scalar tweening.

use super::easing::Easing;
use std::time::Duration;

/// A scalar animating from one value to another over a fixed duration.
///
/// Retargeting mid-flight starts from the current interpolated value, so
/// reversing a fade never jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// A settled transition resting at `value`.
    pub fn new(value: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            start: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Linear progress in [0, 1] at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased value at `now`.
    pub fn value_at(&self, now: Duration) -> f64 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Value the tween is heading for.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the target has been reached.
    pub fn is_settled(&self, now: Duration) -> bool {
        self.from == self.to || self.progress(now) >= 1.0
    }

    /// Animate toward `to`, starting at `now` from the current value.
    ///
    /// Retargeting to the value already targeted keeps the running animation.
    pub fn retarget(&mut self, to: f64, now: Duration) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
    }

    /// Restart from `from` toward `to` regardless of the current state.
    pub fn restart(&mut self, from: f64, to: f64, now: Duration) {
        self.from = from;
        self.to = to;
        self.start = now;
    }

    /// Jump to `value` with no animation.
    pub fn snap(&mut self, value: f64) {
        self.from = value;
        self.to = value;
    }
}
