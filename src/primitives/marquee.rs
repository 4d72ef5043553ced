//! Infinite horizontal marquee.
//!
//! The strip holds two copies of the content laid end to end. Translating by
//! exactly one copy width and wrapping back to zero is invisible, so the loop
//! is seamless. Progress is stored as a phase in [0, 1) of one copy width,
//! which makes pausing a matter of not advancing it and keeps the visual
//! position continuous when the copy width is remeasured.

use std::time::Duration;
use tracing::debug;

/// Duration used until the content has been measured.
pub const DEFAULT_DURATION_SECS: f64 = 20.0;

/// Number of content copies in the strip.
pub const COPIES: usize = 2;

/// Travel direction of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    /// Content travels right to left.
    #[default]
    Left,
    /// Content travels left to right.
    Right,
}

/// Marquee behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    /// Scroll speed in virtual pixels per second.
    pub speed: f64,
    /// Travel direction.
    pub direction: MarqueeDirection,
    /// Freeze while the pointer is over the strip.
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: 40.0,
            direction: MarqueeDirection::Left,
            pause_on_hover: true,
        }
    }
}

/// Measured width, speed and the loop duration derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeGeometry {
    /// Width of one content copy in virtual pixels.
    pub content_width: f64,
    /// Speed the duration was derived from.
    pub speed: f64,
    /// Seconds for one copy width to scroll past.
    pub duration_secs: f64,
}

impl MarqueeGeometry {
    /// Derive the loop duration from a copy width and a speed.
    ///
    /// A missing, empty, or non-finite measurement and a non-positive speed
    /// fall back to [`DEFAULT_DURATION_SECS`].
    pub fn derive(content_width: f64, speed: f64) -> Self {
        let usable = content_width.is_finite()
            && content_width > 0.0
            && speed.is_finite()
            && speed > 0.0;
        let duration_secs = if usable {
            content_width / speed
        } else {
            DEFAULT_DURATION_SECS
        };
        Self {
            content_width: content_width.max(0.0),
            speed,
            duration_secs,
        }
    }

    /// Whether the geometry can actually animate.
    pub fn is_animatable(&self) -> bool {
        self.content_width > 0.0 && self.speed > 0.0
    }
}

/// Animation state for one marquee strip.
#[derive(Debug, Clone)]
pub struct Marquee {
    config: MarqueeConfig,
    geometry: MarqueeGeometry,
    /// Set when a measurement was requested but unavailable.
    needs_measure: bool,
    phase: f64,
    last_tick: Option<Duration>,
    hovered: bool,
}

impl Marquee {
    /// Unmeasured marquee at phase 0.
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            config,
            geometry: MarqueeGeometry::derive(0.0, config.speed),
            needs_measure: true,
            phase: 0.0,
            last_tick: None,
            hovered: false,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Last measurement and its loop duration.
    pub fn geometry(&self) -> &MarqueeGeometry {
        &self.geometry
    }

    /// True until the first successful measurement.
    pub fn needs_measure(&self) -> bool {
        self.needs_measure
    }

    /// Record the measured width of one content copy.
    ///
    /// `None` means the strip has not been laid out yet: the current
    /// geometry is kept and the marquee stays flagged for a remeasure.
    pub fn measure(&mut self, content_width: Option<f64>) {
        let Some(width) = content_width else {
            self.needs_measure = true;
            return;
        };
        self.needs_measure = false;
        if width != self.geometry.content_width {
            self.geometry = MarqueeGeometry::derive(width, self.config.speed);
            debug!(
                width,
                duration_secs = self.geometry.duration_secs,
                "marquee remeasured"
            );
        }
    }

    /// Change speed without jumping; the phase carries over.
    pub fn set_speed(&mut self, speed: f64) {
        if speed != self.config.speed {
            self.config.speed = speed;
            self.geometry = MarqueeGeometry::derive(self.geometry.content_width, speed);
        }
    }

    /// Pointer entered or left the strip.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the pointer is over the strip.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the strip is frozen this frame.
    pub fn is_paused(&self) -> bool {
        self.config.pause_on_hover && self.hovered
    }

    /// Advance the animation to `now`. Returns whether the strip moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_sub(last))
            .unwrap_or_default();
        self.last_tick = Some(now);

        if self.is_paused() || !self.geometry.is_animatable() || elapsed.is_zero() {
            return false;
        }
        self.phase = (self.phase + elapsed.as_secs_f64() / self.geometry.duration_secs).fract();
        true
    }

    /// Loop progress in [0, 1).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Horizontal translation of the strip in virtual pixels, in
    /// [-content_width, 0].
    pub fn offset_px(&self) -> f64 {
        let width = self.geometry.content_width;
        match self.config.direction {
            MarqueeDirection::Left => -self.phase * width,
            MarqueeDirection::Right => -(1.0 - self.phase) * width,
        }
    }
}
