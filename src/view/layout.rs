//! Screen layout rendering.
//!
//! Splits the screen into a reading-progress bar, the scrolling page and a
//! status bar, then draws the modal over everything.

use super::constants::{PROGRESS_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::state::AppState;
use crate::view::highlighter::SyntaxHighlighter;
use crate::view::styles::Palette;
use crate::view::{modal, page};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Fixed regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Scroll progress bar along the top.
    pub progress: Rect,
    /// Viewport onto the page.
    pub page: Rect,
    /// Key hints along the bottom.
    pub status: Rect,
}

/// Split `area` into progress bar, page and status bar.
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROGRESS_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenLayout {
        progress: chunks[0],
        page: chunks[1],
        status: chunks[2],
    }
}

/// Render the whole screen as of `now`.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    highlighter: &SyntaxHighlighter,
    palette: &Palette,
    now: Duration,
) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let screen = calculate_screen_layout(area);
    let buf = frame.buffer_mut();
    render_progress_bar(screen.progress, buf, state.page().progress(), palette);
    page::render_page(screen.page, buf, state, highlighter, palette, now);
    render_status_bar(screen.status, buf, state, palette);

    modal::render_project_modal(frame, state, now, palette);
}

/// Reading progress as a bar across the top row.
pub fn render_progress_bar(area: Rect, buf: &mut Buffer, progress: f64, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    let filled = (progress.clamp(0.0, 1.0) * f64::from(area.width)).round() as u16;
    let bar = Line::from(vec![
        Span::styled("━".repeat(usize::from(filled)), palette.accent()),
        Span::styled(
            "─".repeat(usize::from(area.width - filled)),
            Style::default().fg(palette.border),
        ),
    ]);
    Paragraph::new(bar).render(area, buf);
}

/// Build keyboard hints for the status bar, dropping trailing hints that
/// do not fit in `width`.
fn build_keyboard_hints(modal_open: bool, width: usize) -> String {
    let hints: &[&str] = if modal_open {
        &["Esc close", "j/k scroll", "g/G top/bottom"]
    } else {
        &[
            "q quit",
            "j/k scroll",
            "Tab focus",
            "Enter open",
            "[/] tabs",
            "h/l code",
        ]
    };

    let mut text = String::new();
    for hint in hints {
        let extra = if text.is_empty() { 0 } else { 3 };
        if text.width() + extra + hint.width() > width {
            break;
        }
        if !text.is_empty() {
            text.push_str(" · ");
        }
        text.push_str(hint);
    }
    text
}

/// Render the status bar: profile and current section on the left, key
/// hints on the right.
fn render_status_bar(area: Rect, buf: &mut Buffer, state: &AppState, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    let name = state.portfolio().profile.name.as_str();
    let section = page::current_section(state.layout(), state.page().offset())
        .map(|s| format!(" · {}", s.title()))
        .unwrap_or_default();
    let left_width = name.width() + section.width() + 1;

    let available = usize::from(area.width).saturating_sub(left_width + 2);
    let hints = build_keyboard_hints(state.modal().is_open(), available);
    let padding = usize::from(area.width)
        .saturating_sub(left_width + hints.width() + 1);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(name, palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled(section, palette.muted()),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, palette.muted()),
    ]);
    Paragraph::new(line).render(area, buf);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
