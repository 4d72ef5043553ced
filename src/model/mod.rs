//! Domain model types (pure).
//!
//! All types in this module are plain data: content records, geometry, user
//! intents and errors.

pub mod content;
pub mod error;
pub mod geometry;
pub mod key_action;

pub use content::{
    AboutTab, Certification, CodeSnippet, ContentWarning, HighlightCard, Portfolio, Profile,
    Project, Section, Testimonial,
};
pub use error::{AppError, ContentError};
pub use geometry::{Bounds, Point, CELL_HEIGHT_PX, CELL_WIDTH_PX};
pub use key_action::KeyAction;
