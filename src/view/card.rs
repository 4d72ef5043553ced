//! Highlight card: a glow border around two stacked faces.
//!
//! The summary face sits underneath and fades and dims as the card reveals.
//! The detail face grows from a smaller inset box to the full interior.
//! Whichever face dominates is drawn last, over a cleared area.

use crate::model::HighlightCard;
use crate::primitives::RevealLayers;
use crate::state::CardState;
use crate::view::glow::render_glow_border;
use crate::view::styles::{Palette, VISIBLE_THRESHOLD};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use std::time::Duration;

/// Blur above which the summary face is drawn dim.
const BLUR_DIM_THRESHOLD: f64 = 2.0;

/// Draw one card at `area` as of `now`.
pub fn render_card(
    area: Rect,
    buf: &mut Buffer,
    card: &HighlightCard,
    state: &CardState,
    focused: bool,
    now: Duration,
    palette: &Palette,
) {
    render_glow_border(
        area,
        buf,
        state.glow.frame(now),
        state.glow.config().border_width,
        palette,
        focused,
    );

    let inner = area.inner(Margin::new(2, 1));
    if inner.is_empty() {
        return;
    }

    let layers = state.reveal.layers(now);
    if layers.detail_on_top() {
        render_summary(inner, buf, card, &layers, palette, false);
        render_detail(inner, buf, card, &layers, palette, true);
    } else {
        render_detail(inner, buf, card, &layers, palette, false);
        render_summary(inner, buf, card, &layers, palette, true);
    }
}

/// `area` shrunk around its center by `scale`.
pub fn scaled(area: Rect, scale: f64) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let dx = ((1.0 - scale) * f64::from(area.width) / 2.0).round() as u16;
    let dy = ((1.0 - scale) * f64::from(area.height) / 2.0).round() as u16;
    area.inner(Margin::new(dx, dy))
}

fn render_summary(
    area: Rect,
    buf: &mut Buffer,
    card: &HighlightCard,
    layers: &RevealLayers,
    palette: &Palette,
    on_top: bool,
) {
    if layers.base_opacity < VISIBLE_THRESHOLD {
        return;
    }
    let mut text = palette.faded(palette.text, layers.base_opacity);
    if layers.base_blur > BLUR_DIM_THRESHOLD {
        text = text.add_modifier(Modifier::DIM);
    }
    let lines = vec![
        Line::from(Span::styled(
            card.title.as_str(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(card.blurb.as_str(), text)),
    ];
    draw_face(area, buf, lines, palette, on_top);
}

fn render_detail(
    area: Rect,
    buf: &mut Buffer,
    card: &HighlightCard,
    layers: &RevealLayers,
    palette: &Palette,
    on_top: bool,
) {
    if layers.detail_opacity < VISIBLE_THRESHOLD {
        return;
    }
    let area = scaled(area, layers.detail_scale);
    let text = palette.faded(palette.text, layers.detail_opacity);
    let accent = palette
        .faded(palette.accent, layers.detail_opacity)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(card.detail_title.as_str(), accent)),
        Line::from(Span::styled(card.detail.as_str(), text)),
        Line::from(Span::styled(format!("{} →", card.cta), accent)),
    ];
    draw_face(area, buf, lines, palette, on_top);
}

fn draw_face(area: Rect, buf: &mut Buffer, lines: Vec<Line<'_>>, palette: &Palette, on_top: bool) {
    if on_top {
        Clear.render(area, buf);
    }
    Paragraph::new(lines)
        .style(Style::default().bg(palette.background))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
