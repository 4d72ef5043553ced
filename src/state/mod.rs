//! Page state machine (pure).
//!
//! All state transitions are plain methods driven by explicit time, testable
//! without a terminal.

pub mod app_state;
pub mod mouse_handler;
pub mod page_layout;

// Re-export for convenience
pub use app_state::{AppState, CardState, Intent, COPIED_FEEDBACK};
pub use mouse_handler::{
    detect_modal_click, detect_page_target, detect_tab_click, screen_to_page, screen_to_viewport,
    PageTarget, TabClickResult,
};
pub use page_layout::PageLayout;
