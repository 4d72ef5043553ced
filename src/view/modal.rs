//! Project modal overlay.
//!
//! The backdrop dims the whole screen by the modal's presence. The content
//! box grows from 90% scale and slides up into place while opening. Once
//! the modal is closed its payload is gone, so a closing modal only fades
//! the backdrop out.

use super::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::model::{Project, CELL_HEIGHT_PX};
use crate::primitives::{ModalPhase, ModalPresence};
use crate::state::AppState;
use crate::view::card::scaled;
use crate::view::styles::{mix, Palette, VISIBLE_THRESHOLD};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tui_markdown::from_str;

/// How far the backdrop pulls colors toward the background when fully shown.
const BACKDROP_STRENGTH: f64 = 0.6;

/// Full-size modal box, centered on `screen`.
pub fn modal_area(screen: Rect) -> Rect {
    centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, screen)
}

/// The modal box as drawn at `presence`: scaled about its center and
/// shifted down.
pub fn presence_area(area: Rect, presence: ModalPresence) -> Rect {
    let scaled = scaled(area, presence.scale);
    let shift = ((presence.shift / CELL_HEIGHT_PX).round().max(0.0) as u16)
        .min(area.bottom().saturating_sub(scaled.bottom()));
    Rect {
        y: scaled.y + shift,
        ..scaled
    }
}

/// Calculate a centered rect with the given percentage of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Render markdown, layering `base_style` under its own styling.
fn render_markdown_with_style(markdown_text: &str, base_style: Style) -> Vec<Line<'static>> {
    let text = from_str(markdown_text);

    text.lines
        .into_iter()
        .map(|line| {
            let owned_spans: Vec<_> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), base_style.patch(span.style)))
                .collect();
            Line::from(owned_spans)
        })
        .collect()
}

/// Body of the modal for `project`.
pub fn body_lines(project: &Project, palette: &Palette) -> Vec<Line<'static>> {
    let mut meta = vec![Span::styled(project.category.clone(), palette.accent())];
    if !project.tech.is_empty() {
        meta.push(Span::styled(
            format!("  ·  {}", project.tech.join(", ")),
            palette.muted(),
        ));
    }

    let mut lines = vec![Line::from(meta), Line::default()];
    lines.extend(render_markdown_with_style(
        &project.detail,
        Style::default().fg(palette.text),
    ));

    if !project.achievements.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Key achievements",
            palette.accent().add_modifier(Modifier::BOLD),
        )));
        lines.extend(project.achievements.iter().map(|achievement| {
            Line::from(vec![
                Span::styled("  • ", palette.accent()),
                Span::styled(achievement.clone(), Style::default().fg(palette.text)),
            ])
        }));
    }

    if project.confidential {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Client work: source and data are confidential.",
            palette.muted().add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn body_paragraph(project: &Project, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(body_lines(project, palette)).wrap(Wrap { trim: false })
}

/// Inside of the modal box, where the body text goes.
fn body_area(area: Rect) -> Rect {
    area.inner(Margin::new(2, 1))
}

/// Furthest the body of `project` can scroll inside a modal box `area`.
pub fn body_scroll_limit(project: &Project, area: Rect, palette: &Palette) -> u16 {
    let inner = body_area(area);
    let rows = body_paragraph(project, palette).line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

/// Pull every cell in `area` toward the background.
fn render_backdrop(area: Rect, buf: &mut Buffer, opacity: f64, palette: &Palette) {
    if opacity < VISIBLE_THRESHOLD {
        return;
    }
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if palette.is_monochrome() {
                cell.modifier.insert(Modifier::DIM);
            } else {
                cell.fg = mix(cell.fg, palette.background, BACKDROP_STRENGTH * opacity);
            }
        }
    }
}

/// Draw the modal, if any part of it is visible, over the whole frame.
pub fn render_project_modal(frame: &mut Frame, state: &AppState, now: Duration, palette: &Palette) {
    let modal = state.modal();
    if modal.phase(now) == ModalPhase::Closed {
        return;
    }
    let screen = frame.area();
    let presence = modal.presence(now);
    render_backdrop(screen, frame.buffer_mut(), presence.opacity, palette);

    let Some(project) = modal
        .payload()
        .and_then(|&index| state.portfolio().projects.get(index))
    else {
        return;
    };

    let area = presence_area(modal_area(screen), presence);
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);

    let border = palette.faded(palette.accent, presence.opacity);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(palette.base())
        .title(Span::styled(
            format!(" {} ", project.title),
            border.add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(" Esc close · j/k scroll ", palette.muted())).centered());
    frame.render_widget(block, area);

    let paragraph = body_paragraph(project, palette).scroll((modal.body_scroll(), 0));
    frame.render_widget(paragraph, body_area(area));
}
