//! Layout dimension constants for screen chrome.
//!
//! Page geometry lives in `state::page_layout`; these are the rows and
//! proportions around it.

/// Height of the reading-progress bar in lines.
pub const PROGRESS_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the project modal.
pub const MODAL_WIDTH_PERCENT: u16 = 80;

/// Height percentage of the project modal.
pub const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Caret drawn after the typed text.
pub const CARET: &str = "▌";
