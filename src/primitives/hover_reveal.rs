//! Two-layer reveal card.
//!
//! Both layers are always present. Revealing fades and blurs the base layer
//! and cross-fades a scaled detail layer in; hiding runs the same fade back.
//! Pointer hover, an explicit tap and keyboard focus are independent
//! sources and the card is revealed while any of them is active.

use super::easing::Easing;
use super::transition::Transition;
use std::time::Duration;
use tracing::trace;

/// Default cross-fade time, used both ways.
pub const REVEAL_FADE: Duration = Duration::from_millis(300);

/// Base layer opacity when fully revealed.
const BASE_REVEALED_OPACITY: f64 = 0.3;
/// Base layer blur radius in virtual pixels when fully revealed.
const BASE_REVEALED_BLUR: f64 = 4.0;
/// Detail layer scale when hidden.
const DETAIL_HIDDEN_SCALE: f64 = 0.8;

/// Input that can hold a card revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSource {
    /// The pointer is over the card.
    PointerHover,
    /// The card was clicked or tapped once.
    ExplicitTap,
    /// The card has keyboard focus.
    KeyboardFocus,
}

/// Result of tapping a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The card was hidden and is now revealed.
    Revealed,
    /// The card was already revealed; the caller should follow its link.
    Activate,
}

/// Interpolated style of both layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLayers {
    /// Summary layer opacity.
    pub base_opacity: f64,
    /// Summary layer blur radius in virtual pixels.
    pub base_blur: f64,
    /// Detail layer opacity.
    pub detail_opacity: f64,
    /// Detail layer scale, growing to 1 as it appears.
    pub detail_scale: f64,
}

impl RevealLayers {
    fn at(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            base_opacity: 1.0 - (1.0 - BASE_REVEALED_OPACITY) * p,
            base_blur: BASE_REVEALED_BLUR * p,
            detail_opacity: p,
            detail_scale: DETAIL_HIDDEN_SCALE + (1.0 - DETAIL_HIDDEN_SCALE) * p,
        }
    }

    /// Whether the detail layer dominates the cell at this point of the fade.
    pub fn detail_on_top(&self) -> bool {
        self.detail_opacity > 0.5
    }
}

/// Two-layer reveal state for one card.
///
/// The card is revealed while any [`RevealSource`] holds it.
#[derive(Debug, Clone)]
pub struct HoverReveal {
    hovered: bool,
    tapped: bool,
    focused: bool,
    revealed: bool,
    progress: Transition,
}

impl Default for HoverReveal {
    fn default() -> Self {
        Self::new(REVEAL_FADE)
    }
}

impl HoverReveal {
    /// Hidden card with a `fade` cross-fade.
    pub fn new(fade: Duration) -> Self {
        Self {
            hovered: false,
            tapped: false,
            focused: false,
            revealed: false,
            progress: Transition::new(0.0, fade, Easing::EaseOut),
        }
    }

    /// Whether the detail layer is the target.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Set the reveal state directly. Returns whether it changed.
    pub fn set_revealed(&mut self, revealed: bool, now: Duration) -> bool {
        if revealed == self.revealed {
            return false;
        }
        trace!(revealed, "reveal card state changed");
        self.revealed = revealed;
        self.progress.retarget(if revealed { 1.0 } else { 0.0 }, now);
        true
    }

    /// Turn one reveal source on or off. Returns whether the reveal state
    /// changed.
    pub fn signal(&mut self, source: RevealSource, active: bool, now: Duration) -> bool {
        match source {
            RevealSource::PointerHover => self.hovered = active,
            RevealSource::ExplicitTap => self.tapped = active,
            RevealSource::KeyboardFocus => self.focused = active,
        }
        self.set_revealed(self.hovered || self.tapped || self.focused, now)
    }

    /// Whether `source` currently holds the card revealed.
    pub fn is_source_active(&self, source: RevealSource) -> bool {
        match source {
            RevealSource::PointerHover => self.hovered,
            RevealSource::ExplicitTap => self.tapped,
            RevealSource::KeyboardFocus => self.focused,
        }
    }

    /// Handle a tap or click: the first reveals, the next activates.
    pub fn tap(&mut self, now: Duration) -> TapOutcome {
        if self.revealed {
            TapOutcome::Activate
        } else {
            self.signal(RevealSource::ExplicitTap, true, now);
            TapOutcome::Revealed
        }
    }

    /// Clear every source and hide.
    pub fn dismiss(&mut self, now: Duration) -> bool {
        self.hovered = false;
        self.tapped = false;
        self.focused = false;
        self.set_revealed(false, now)
    }

    /// Layer styles at `now`.
    pub fn layers(&self, now: Duration) -> RevealLayers {
        RevealLayers::at(self.progress.value_at(now))
    }

    /// Whether the cross-fade is still running.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.progress.is_settled(now)
    }
}
