//! Cooperative timing primitives (pure).
//!
//! Nothing here sleeps or spawns. Time is an explicit `Duration` since app
//! start, supplied by the event loop (or by tests), and timers are deadlines
//! that fire when `now` reaches them.

pub mod blink;
pub mod frame;
pub mod timer;

pub use blink::Blink;
pub use frame::FrameRequest;
pub use timer::Timer;

use std::time::Duration;

/// Target frame interval for animation work (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Smallest step any repeating timer may use.
///
/// A zero-length step would let a catch-up loop spin forever.
pub const MIN_STEP: Duration = Duration::from_millis(1);

/// Clamp a configured step to [`MIN_STEP`].
pub fn clamp_step(step: Duration) -> Duration {
    step.max(MIN_STEP)
}
