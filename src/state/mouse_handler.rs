//! Mouse hit testing.
//!
//! Pure functions mapping terminal coordinates to the page element or modal
//! region under them. The caller owns the rendered areas.

use crate::primitives::ClickTarget;
use crate::state::page_layout::PageLayout;
use ratatui::layout::{Position, Rect};

/// Result of detecting which tab was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabClickResult {
    /// Click was on tab at index
    TabClicked(usize),
    /// Click was outside any tab
    NoTab,
}

/// Interactive page element under a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    /// Skill card by index.
    Card(usize),
    /// About tab by index.
    Tab(usize),
    /// Project row by index.
    Project(usize),
    /// Previous snippet button.
    SnippetPrev,
    /// Next snippet button.
    SnippetNext,
    /// Numbered picker jumping straight to a snippet.
    Snippet(usize),
    /// Copy button of the snippet on show.
    SnippetCopy,
    /// Testimonial ticker row.
    TestimonialStrip,
    /// Tech stack ticker row.
    TechStrip,
}

/// Detect which tab (if any) was clicked.
///
/// `tabs` are the hit rects of the rendered tab labels. Gaps between labels
/// belong to no tab.
pub fn detect_tab_click(click_x: u16, click_y: u16, tab_area: Rect, tabs: &[Rect]) -> TabClickResult {
    let position = Position::new(click_x, click_y);
    if !tab_area.contains(position) {
        return TabClickResult::NoTab;
    }

    match tabs.iter().position(|rect| rect.contains(position)) {
        Some(index) => TabClickResult::TabClicked(index),
        None => TabClickResult::NoTab,
    }
}

/// Convert a screen position to page cells.
///
/// Returns `None` when the position is outside the page viewport.
pub fn screen_to_page(column: u16, row: u16, page_area: Rect, offset: u16) -> Option<(u16, u16)> {
    let (x, y) = screen_to_viewport(column, row, page_area)?;
    Some((x, y.saturating_add(offset)))
}

/// Convert a screen position to cells relative to the page viewport.
pub fn screen_to_viewport(column: u16, row: u16, page_area: Rect) -> Option<(u16, u16)> {
    if !page_area.contains(Position::new(column, row)) {
        return None;
    }
    Some((column - page_area.x, row - page_area.y))
}

/// Find the interactive element at page cell `(x, y)`.
pub fn detect_page_target(x: u16, y: u16, layout: &PageLayout) -> Option<PageTarget> {
    let position = Position::new(x, y);
    let hit = |rect: &Rect| rect.contains(position);

    if let Some(i) = layout.cards.iter().position(hit) {
        return Some(PageTarget::Card(i));
    }
    if let TabClickResult::TabClicked(i) = detect_tab_click(x, y, layout.tab_bar, &layout.tabs) {
        return Some(PageTarget::Tab(i));
    }
    if let Some(i) = layout.projects.iter().position(hit) {
        return Some(PageTarget::Project(i));
    }
    if hit(&layout.snippet_prev) {
        return Some(PageTarget::SnippetPrev);
    }
    if hit(&layout.snippet_next) {
        return Some(PageTarget::SnippetNext);
    }
    if let Some(i) = layout.snippet_picks.iter().position(hit) {
        return Some(PageTarget::Snippet(i));
    }
    if hit(&layout.snippet_copy) {
        return Some(PageTarget::SnippetCopy);
    }
    if hit(&layout.testimonial_strip) {
        return Some(PageTarget::TestimonialStrip);
    }
    if hit(&layout.tech_strip) {
        return Some(PageTarget::TechStrip);
    }
    None
}

/// Classify a click while the modal is shown.
///
/// Anything outside the content box is backdrop.
pub fn detect_modal_click(column: u16, row: u16, modal_area: Rect) -> ClickTarget {
    if modal_area.contains(Position::new(column, row)) {
        ClickTarget::Content
    } else {
        ClickTarget::Backdrop
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
