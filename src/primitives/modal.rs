//! Modal overlay controller.
//!
//! The open state is derived from the payload, so "open" and "has a payload"
//! cannot disagree. While open the controller holds a scroll-lock guard;
//! closing drops it.

use super::easing::Easing;
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::transition::Transition;
use std::time::Duration;
use tracing::debug;

/// Enter and exit animation time.
pub const MODAL_FADE: Duration = Duration::from_millis(300);

/// Content scale when hidden.
const HIDDEN_SCALE: f64 = 0.9;
/// Downward offset of hidden content in virtual pixels.
const HIDDEN_SHIFT: f64 = 20.0;

/// Where a click landed relative to an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// Inside the content box.
    Content,
}

/// Visibility phase, including the enter and exit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Not shown.
    Closed,
    /// Fading and scaling in.
    Opening,
    /// Fully shown.
    Open,
    /// Backdrop fading out after close.
    Closing,
}

/// Interpolated presentation of the modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalPresence {
    /// Backdrop and content opacity.
    pub opacity: f64,
    /// Content scale, 1 when fully open.
    pub scale: f64,
    /// Downward content offset in virtual pixels, 0 when fully open.
    pub shift: f64,
}

/// Open/close lifecycle of a modal showing a `T`.
///
/// The payload is present exactly while the modal is open, and the page
/// scroll lock is held for that same span.
#[derive(Debug)]
pub struct ModalController<T> {
    payload: Option<T>,
    guard: Option<ScrollLockGuard>,
    lock: ScrollLock,
    presence: Transition,
    body_scroll: u16,
}

impl<T> ModalController<T> {
    /// Closed modal that will take `lock` while open.
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            payload: None,
            guard: None,
            lock,
            presence: Transition::new(0.0, MODAL_FADE, Easing::EaseOut),
            body_scroll: 0,
        }
    }

    /// Whether a payload is shown.
    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    /// Item being shown.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Show `item`. Opening while already open swaps the payload and keeps
    /// the single lock hold.
    pub fn open(&mut self, item: T, now: Duration) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        self.payload = Some(item);
        self.body_scroll = 0;
        self.presence.retarget(1.0, now);
        debug!("modal opened");
    }

    /// Hide the modal and release the scroll lock. Returns the payload that
    /// was shown, if any.
    pub fn close(&mut self, now: Duration) -> Option<T> {
        let payload = self.payload.take()?;
        self.guard = None;
        self.presence.retarget(0.0, now);
        debug!("modal closed");
        Some(payload)
    }

    /// Route a click. Backdrop clicks close; content clicks are contained.
    /// Returns whether the modal closed.
    pub fn click(&mut self, target: ClickTarget, now: Duration) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(now).is_some(),
            ClickTarget::Content => false,
        }
    }

    /// Visibility phase at `now`.
    pub fn phase(&self, now: Duration) -> ModalPhase {
        let settled = self.presence.is_settled(now);
        match (self.is_open(), settled) {
            (true, true) => ModalPhase::Open,
            (true, false) => ModalPhase::Opening,
            (false, true) => ModalPhase::Closed,
            (false, false) => ModalPhase::Closing,
        }
    }

    /// Interpolated opacity, scale and shift at `now`.
    pub fn presence(&self, now: Duration) -> ModalPresence {
        let p = self.presence.value_at(now);
        ModalPresence {
            opacity: p,
            scale: HIDDEN_SCALE + (1.0 - HIDDEN_SCALE) * p,
            shift: HIDDEN_SHIFT * (1.0 - p),
        }
    }

    /// Whether the enter or exit animation is running.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.presence.is_settled(now)
    }

    /// Rows the body is scrolled by.
    pub fn body_scroll(&self) -> u16 {
        self.body_scroll
    }

    /// Scroll the modal body by `delta` lines, clamped to `[0, max]`.
    pub fn scroll_body(&mut self, delta: i32, max: u16) {
        let next = (i32::from(self.body_scroll) + delta).clamp(0, i32::from(max));
        self.body_scroll = u16::try_from(next).unwrap_or(max);
    }
}
