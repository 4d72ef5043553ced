//! Interactive UI primitives (pure).
//!
//! Each primitive owns its animation and timing state and is driven by
//! explicit time. None of them render; the view layer reads their state.

pub mod carousel;
pub mod easing;
pub mod focus;
pub mod glow;
pub mod hover_reveal;
pub mod marquee;
pub mod modal;
pub mod pointer_bus;
pub mod scroll_lock;
pub mod scroll_progress;
pub mod tabs;
pub mod transition;
pub mod typewriter;

pub use carousel::Carousel;
pub use easing::{CubicBezier, Easing};
pub use focus::{FocusChange, FocusRing};
pub use glow::{GlowBorder, GlowConfig, GlowFrame};
pub use hover_reveal::{HoverReveal, RevealLayers, RevealSource, TapOutcome};
pub use marquee::{Marquee, MarqueeConfig, MarqueeDirection, MarqueeGeometry};
pub use modal::{ClickTarget, ModalController, ModalPhase, ModalPresence};
pub use pointer_bus::{PointerBus, PointerSample, PointerSubscriber, Subscription};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use scroll_progress::PageScroll;
pub use tabs::{TabEntry, TabSwitcher};
pub use transition::Transition;
pub use typewriter::{Typewriter, TypewriterConfig, TypewriterMode};
