//! Single-slot one-shot timer.

use std::time::Duration;

/// A one-shot timer holding at most one pending deadline.
///
/// Scheduling replaces any pending deadline, so an owner can never have two
/// callbacks in flight. Dropping the owner drops the deadline with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    /// Timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending deadline and schedule a new one at `at`.
    pub fn schedule_at(&mut self, at: Duration) {
        self.deadline = Some(at);
    }

    /// Cancel any pending deadline and schedule one `delay` after `from`.
    pub fn schedule(&mut self, from: Duration, delay: Duration) {
        self.schedule_at(from.saturating_add(delay));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// If the deadline has been reached, clear it and return when it was due.
    ///
    /// Returning the scheduled time (not `now`) lets owners chain the next
    /// step from the previous deadline without accumulating drift.
    pub fn take_due(&mut self, now: Duration) -> Option<Duration> {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                Some(at)
            }
            _ => None,
        }
    }
}
