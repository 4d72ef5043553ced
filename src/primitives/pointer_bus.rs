//! Shared pointer fan-out.
//!
//! Every glow border needs the pointer position, but attaching one listener
//! per border would multiply per-event work. Instead the shell publishes raw
//! pointer and scroll events into a single [`PointerBus`]; the bus coalesces
//! them into at most one [`PointerSample`] per frame and hands that sample to
//! every subscriber.
//!
//! Subscriptions are RAII tokens. The bus starts listening with the first
//! subscription and stops with the last, cancelling any pending frame.

use crate::model::geometry::Point;
use crate::timing::FrameRequest;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, info};

/// One coalesced pointer observation, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position in page virtual pixels.
    pub position: Point,
    /// Frame time at which the sample was delivered.
    pub at: Duration,
}

/// Receives coalesced pointer samples.
pub trait PointerSubscriber {
    /// Called once per frame with the latest pointer position.
    fn on_pointer(&mut self, sample: PointerSample);

    /// Called when the pointer leaves the window at `at`.
    fn on_pointer_left(&mut self, _at: Duration) {}
}

type SharedSubscriber = Rc<RefCell<dyn PointerSubscriber>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, SharedSubscriber)>,
    /// Last pointer position relative to the viewport.
    viewport_pointer: Option<Point>,
    /// Page scroll offset added to the viewport position.
    scroll: Point,
    frame: FrameRequest,
}

impl BusInner {
    fn is_listening(&self) -> bool {
        !self.subscribers.is_empty()
    }

    fn request_frame(&mut self) {
        if self.is_listening() && self.viewport_pointer.is_some() {
            self.frame.request();
        }
    }

    fn targets(&self) -> Vec<SharedSubscriber> {
        self.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect()
    }

    fn remove(&mut self, id: u64) {
        self.subscribers.retain(|(sid, _)| *sid != id);
        if self.subscribers.is_empty() {
            self.frame.cancel();
            info!("pointer listeners detached");
        }
    }
}

/// Handle to the pointer bus. Clones share the same bus.
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PointerBus")
            .field("subscribers", &inner.subscribers.len())
            .field("viewport_pointer", &inner.viewport_pointer)
            .field("scroll", &inner.scroll)
            .field("frame", &inner.frame)
            .finish()
    }
}

impl PointerBus {
    /// Bus with no subscribers and no pointer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber`. It receives samples until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, subscriber: SharedSubscriber) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        if inner.subscribers.is_empty() {
            info!("pointer listeners attached");
        }
        inner.subscribers.push((id, subscriber));
        // A late subscriber still sees where the pointer already is.
        inner.request_frame();
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Record a pointer move at a viewport position.
    pub fn pointer_moved(&self, viewport: Point) {
        let mut inner = self.inner.borrow_mut();
        inner.viewport_pointer = Some(viewport);
        inner.request_frame();
    }

    /// Record a page scroll. The pointer has not moved on screen but its
    /// page position has.
    pub fn scrolled(&self, scroll: Point) {
        let mut inner = self.inner.borrow_mut();
        if inner.scroll == scroll {
            return;
        }
        inner.scroll = scroll;
        inner.request_frame();
    }

    /// The pointer left the window at `now`.
    ///
    /// Any pending sample is dropped and every subscriber is told at once;
    /// there is nothing to coalesce.
    pub fn pointer_left(&self, now: Duration) {
        let targets = {
            let mut inner = self.inner.borrow_mut();
            inner.viewport_pointer = None;
            inner.frame.cancel();
            inner.targets()
        };
        for target in &targets {
            target.borrow_mut().on_pointer_left(now);
        }
        debug!(subscribers = targets.len(), "pointer left");
    }

    /// Deliver the pending sample, if any, to every subscriber.
    ///
    /// Returns the number of subscribers notified.
    pub fn run_frame(&self, now: Duration) -> usize {
        let (sample, targets) = {
            let mut inner = self.inner.borrow_mut();
            if !inner.frame.take() {
                return 0;
            }
            let Some(viewport) = inner.viewport_pointer else {
                return 0;
            };
            let position = viewport.offset(inner.scroll.x, inner.scroll.y);
            (PointerSample { position, at: now }, inner.targets())
        };

        // The bus borrow is released so subscribers may drop their own
        // subscription while handling the sample.
        for target in &targets {
            target.borrow_mut().on_pointer(sample);
        }
        debug!(
            x = sample.position.x,
            y = sample.position.y,
            subscribers = targets.len(),
            "pointer frame delivered"
        );
        targets.len()
    }

    /// Whether any subscriber is attached.
    pub fn is_listening(&self) -> bool {
        self.inner.borrow().is_listening()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Whether a sample waits for the next frame.
    pub fn frame_pending(&self) -> bool {
        self.inner.borrow().frame.is_requested()
    }

    /// Frames that delivered a sample so far.
    pub fn frames_delivered(&self) -> u64 {
        self.inner.borrow().frame.delivered()
    }

    /// Last known pointer position in page coordinates.
    pub fn page_pointer(&self) -> Option<Point> {
        let inner = self.inner.borrow();
        inner
            .viewport_pointer
            .map(|p| p.offset(inner.scroll.x, inner.scroll.y))
    }
}

/// Keeps a subscriber registered. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.borrow_mut().remove(self.id);
        }
    }
}
