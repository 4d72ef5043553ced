//! Caret blink phase.

use std::time::Duration;

/// Fixed-period on/off blink, independent of any other animation state.
///
/// The phase is a pure function of time so a caret keeps its rhythm no
/// matter how often the owner is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    half_period: Duration,
    epoch: Duration,
}

impl Blink {
    /// `half_period` is how long the caret stays in each phase.
    pub fn new(half_period: Duration, epoch: Duration) -> Self {
        Self {
            half_period: super::clamp_step(half_period),
            epoch,
        }
    }

    /// Whether the caret is visible at `now`. Starts visible.
    pub fn is_on(&self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.epoch).as_millis();
        (elapsed / self.half_period.as_millis()) % 2 == 0
    }
}
