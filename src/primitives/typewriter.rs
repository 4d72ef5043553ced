//! Typewriter engine: types, holds, and deletes phrases in an endless cycle.
//!
//! # State machine
//!
//! ```text
//! Typing --(full phrase)--> Pausing --(pause elapsed)--> Deleting
//!    ^                                                     |
//!    +-------------(empty, advance phrase index)-----------+
//! ```
//!
//! One [`Timer`] drives every transition. Each transition replaces the
//! pending deadline, so there is never more than one step in flight, and
//! each step is chained from the previous deadline rather than from the
//! tick time so late ticks do not accumulate drift.

use crate::timing::{clamp_step, Blink, Timer};
use std::time::Duration;
use tracing::debug;

/// Timing for a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay before each typed character.
    pub type_speed: Duration,
    /// Delay before each deleted character.
    pub delete_speed: Duration,
    /// Hold time once a phrase is fully typed.
    pub pause: Duration,
    /// Time the caret spends in each blink phase.
    pub caret_blink: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2_000),
            caret_blink: Duration::from_millis(500),
        }
    }
}

/// Current phase of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterMode {
    /// Appending one character per step.
    Typing,
    /// Holding the full phrase.
    Pausing,
    /// Removing one character per step.
    Deleting,
}

/// A running typewriter animation.
///
/// Created by [`Typewriter::mount`]; dropping it tears down its timer.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Character count of each phrase, cached so ticks never rescan.
    lengths: Vec<usize>,
    phrase_index: usize,
    /// Number of characters of the current phrase that are visible.
    visible_chars: usize,
    mode: TypewriterMode,
    timer: Timer,
    caret: Blink,
    config: TypewriterConfig,
}

impl Typewriter {
    /// Start the animation at `now` with the first phrase.
    ///
    /// An empty phrase list produces an idle typewriter that renders nothing
    /// and never schedules.
    pub fn mount(phrases: Vec<String>, config: TypewriterConfig, now: Duration) -> Self {
        let config = TypewriterConfig {
            type_speed: clamp_step(config.type_speed),
            delete_speed: clamp_step(config.delete_speed),
            pause: clamp_step(config.pause),
            caret_blink: config.caret_blink,
        };
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        let mut typewriter = Self {
            phrases,
            lengths,
            phrase_index: 0,
            visible_chars: 0,
            mode: TypewriterMode::Typing,
            timer: Timer::new(),
            caret: Blink::new(config.caret_blink, now),
            config,
        };
        if typewriter.is_idle() {
            debug!("typewriter mounted without phrases; staying idle");
        } else {
            typewriter.enter_typing(now);
        }
        typewriter
    }

    /// Cancel the pending step. The typewriter freezes in place.
    pub fn unmount(&mut self) {
        self.timer.cancel();
    }

    /// True for an empty phrase list; nothing is ever scheduled.
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Index of the phrase being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Current phase of the cycle.
    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    /// The phrase list, in cycle order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Deadline of the pending step, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// The currently visible prefix of the active phrase.
    pub fn visible_text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible_chars) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Whether the caret is drawn at `now`.
    pub fn caret_visible(&self, now: Duration) -> bool {
        !self.is_idle() && self.caret.is_on(now)
    }

    /// Run every step due at or before `now`. Returns whether the visible
    /// text or mode changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = false;
        while let Some(due) = self.timer.take_due(now) {
            self.step(due);
            changed = true;
        }
        changed
    }

    fn current_len(&self) -> usize {
        self.lengths.get(self.phrase_index).copied().unwrap_or(0)
    }

    fn enter_typing(&mut self, at: Duration) {
        self.mode = TypewriterMode::Typing;
        if self.visible_chars >= self.current_len() {
            self.enter_pausing(at);
        } else {
            self.timer.schedule(at, self.config.type_speed);
        }
    }

    fn enter_pausing(&mut self, at: Duration) {
        self.mode = TypewriterMode::Pausing;
        self.timer.schedule(at, self.config.pause);
    }

    fn enter_deleting(&mut self, at: Duration) {
        self.mode = TypewriterMode::Deleting;
        if self.visible_chars == 0 {
            self.advance_phrase(at);
        } else {
            self.timer.schedule(at, self.config.delete_speed);
        }
    }

    fn advance_phrase(&mut self, at: Duration) {
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        debug!(phrase_index = self.phrase_index, "typewriter advancing phrase");
        self.enter_typing(at);
    }

    fn step(&mut self, at: Duration) {
        match self.mode {
            TypewriterMode::Typing => {
                self.visible_chars = (self.visible_chars + 1).min(self.current_len());
                if self.visible_chars >= self.current_len() {
                    self.enter_pausing(at);
                } else {
                    self.timer.schedule(at, self.config.type_speed);
                }
            }
            TypewriterMode::Pausing => self.enter_deleting(at),
            TypewriterMode::Deleting => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.advance_phrase(at);
                } else {
                    self.timer.schedule(at, self.config.delete_speed);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "typewriter_tests.rs"]
mod tests;
