//! Pointer-reactive glow border.
//!
//! A glow is a rotating highlight arc on an element's border. It brightens
//! when the pointer comes within `proximity` of the element (but not when it
//! sits deep inside the inactive zone around the center) and its angle
//! follows the pointer's bearing along the shortest arc.
//!
//! Angle and intensity change every frame, so they live in a shared
//! [`GlowCore`] cell written by the pointer bus rather than in the
//! application state that drives redraw decisions.

use super::easing::Easing;
use super::pointer_bus::{PointerBus, PointerSample, PointerSubscriber, Subscription};
use super::transition::Transition;
use crate::model::geometry::{Bounds, Point};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

/// Fade time for the glow's intensity.
pub const ACTIVE_FADE: Duration = Duration::from_millis(300);

/// Glow behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowConfig {
    /// Static border only; no pointer tracking.
    pub disabled: bool,
    /// Distance in virtual pixels outside the box that still activates.
    pub proximity: f64,
    /// Fraction of half the smaller box side forming the dead zone.
    pub inactive_zone: f64,
    /// Angular spread of the highlight arc in degrees.
    pub spread: f64,
    /// Time for the angle to settle on a new bearing.
    pub movement_duration: Duration,
    /// Border weight: 1 rounded, 2 thick, 3 or more double.
    pub border_width: u16,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            disabled: true,
            proximity: 0.0,
            inactive_zone: 0.7,
            spread: 20.0,
            movement_duration: Duration::from_secs(2),
            border_width: 1,
        }
    }
}

impl GlowConfig {
    /// Tuning used by the highlight cards.
    pub fn card() -> Self {
        Self {
            disabled: false,
            proximity: 64.0,
            inactive_zone: 0.01,
            spread: 80.0,
            movement_duration: Duration::from_secs(2),
            border_width: 3,
        }
    }
}

/// Whether a pointer at `pointer` activates a glow on `bounds`.
///
/// Unmeasured boxes never activate.
pub fn is_active(bounds: &Bounds, pointer: Point, config: &GlowConfig) -> bool {
    if !bounds.is_measurable() {
        return false;
    }
    let inactive_radius = 0.5 * bounds.width.min(bounds.height) * config.inactive_zone;
    if pointer.distance_to(bounds.center()) < inactive_radius {
        return false;
    }
    bounds.contains_with_margin(pointer, config.proximity)
}

/// Signed rotation from `current` to `target` along the shorter way round,
/// in (-180, 180].
pub fn shortest_angle_delta(current: f64, target: f64) -> f64 {
    let d = (target - current).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Highlight strength in [0, 1] of the border point at `bearing` for a glow
/// pointing at `angle`.
///
/// The arc opens `spread` degrees before the angle and spans `2.5 * spread`,
/// brightest at its middle.
pub fn arc_intensity(bearing: f64, angle: f64, spread: f64) -> f64 {
    if spread <= 0.0 {
        return 0.0;
    }
    let width = (spread * 2.5).min(360.0);
    let offset = (bearing - (angle - spread)).rem_euclid(360.0);
    if offset >= width {
        return 0.0;
    }
    let half = width * 0.5;
    1.0 - (offset - half).abs() / half
}

/// Per-frame glow values read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFrame {
    /// Arc direction in [0, 360).
    pub angle: f64,
    /// Eased intensity in [0, 1].
    pub opacity: f64,
    /// Arc spread in degrees, copied from the config.
    pub spread: f64,
    /// Static border; nothing to light.
    pub disabled: bool,
}

/// Animated glow values for one element.
#[derive(Debug, Clone)]
pub struct GlowCore {
    config: GlowConfig,
    bounds: Bounds,
    angle: Transition,
    active: Transition,
    recomputes: u64,
}

impl GlowCore {
    /// Unmeasured, inactive glow pointing up.
    pub fn new(config: GlowConfig) -> Self {
        Self {
            config,
            bounds: Bounds::default(),
            angle: Transition::new(0.0, config.movement_duration, Easing::expo_out()),
            active: Transition::new(0.0, ACTIVE_FADE, Easing::EaseOut),
            recomputes: 0,
        }
    }

    /// Recompute activation and angle for a pointer at `pointer`.
    pub fn update(&mut self, pointer: Point, now: Duration) {
        if self.config.disabled {
            return;
        }
        self.recomputes += 1;
        let active = is_active(&self.bounds, pointer, &self.config);
        self.active.retarget(if active { 1.0 } else { 0.0 }, now);
        if !active {
            return;
        }
        let current = self.angle.value_at(now);
        let bearing = self.bounds.bearing_to(pointer);
        let delta = shortest_angle_delta(current, bearing);
        self.angle.retarget(current + delta, now);
    }

    /// Fade out because the pointer is gone. The angle stays put.
    pub fn release(&mut self, now: Duration) {
        if self.config.disabled {
            return;
        }
        self.active.retarget(0.0, now);
    }

    /// Target activation: 1 when the last pointer sample activated the glow.
    pub fn active_fraction(&self) -> f64 {
        self.active.target()
    }

    /// Current angle in [0, 360).
    pub fn angle(&self, now: Duration) -> f64 {
        self.angle.value_at(now).rem_euclid(360.0)
    }

    /// Angle the tween is heading for, unnormalized.
    pub fn target_angle(&self) -> f64 {
        self.angle.target()
    }

    /// Element box the glow measures against.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Pointer samples processed so far.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Whether angle or intensity is still moving.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.angle.is_settled(now) || !self.active.is_settled(now)
    }

    /// Values to draw at `now`.
    pub fn frame(&self, now: Duration) -> GlowFrame {
        GlowFrame {
            angle: self.angle(now),
            opacity: if self.config.disabled {
                0.0
            } else {
                self.active.value_at(now)
            },
            spread: self.config.spread,
            disabled: self.config.disabled,
        }
    }
}

impl PointerSubscriber for GlowCore {
    fn on_pointer(&mut self, sample: PointerSample) {
        self.update(sample.position, sample.at);
    }

    fn on_pointer_left(&mut self, at: Duration) {
        self.release(at);
    }
}

/// A glow border bound to the pointer bus.
///
/// Enabled glows subscribe on construction and unsubscribe when dropped.
/// Disabled glows never touch the bus.
#[derive(Debug)]
pub struct GlowBorder {
    core: Rc<RefCell<GlowCore>>,
    config: GlowConfig,
    subscription: Option<Subscription>,
}

impl GlowBorder {
    /// Create a glow and subscribe it to `bus` unless disabled.
    pub fn new(config: GlowConfig, bus: &PointerBus) -> Self {
        let core = Rc::new(RefCell::new(GlowCore::new(config)));
        let subscription = if config.disabled {
            None
        } else {
            Some(bus.subscribe(core.clone()))
        };
        Self {
            core,
            config,
            subscription,
        }
    }

    /// Settings the glow was built with.
    pub fn config(&self) -> &GlowConfig {
        &self.config
    }

    /// Whether the glow listens to the pointer bus.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Update the element box, read at layout time.
    ///
    /// Unmeasured boxes leave the glow inactive until a later layout pass.
    pub fn set_bounds(&self, bounds: Bounds) {
        let mut core = self.core.borrow_mut();
        if core.bounds != bounds {
            debug!(?bounds, "glow bounds updated");
            core.bounds = bounds;
        }
    }

    /// Values to draw at `now`.
    pub fn frame(&self, now: Duration) -> GlowFrame {
        self.core.borrow().frame(now)
    }

    /// Whether the border needs redrawing next frame.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.config.disabled && self.core.borrow().is_animating(now)
    }

    /// 1 when the pointer last activated the glow, else 0.
    pub fn active_fraction(&self) -> f64 {
        self.core.borrow().active_fraction()
    }

    /// Pointer samples processed so far.
    pub fn recomputes(&self) -> u64 {
        self.core.borrow().recomputes()
    }
}
