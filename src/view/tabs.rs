//! About section: tab bar and the active tab's content.
//!
//! The bar uses ratatui's Tabs widget with its default padding and divider,
//! which is what `page_layout::tab_hit_rects` assumes for click targets.

use crate::model::{AboutTab, CELL_HEIGHT_PX};
use crate::primitives::TabEntry;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

/// Render the tab bar.
///
/// # Behavior
/// - One tab per label, in order
/// - Highlights the selected tab if `Some(index)` and index is in bounds
/// - Out-of-bounds indices are treated as None
pub fn render_tab_bar(
    area: Rect,
    buf: &mut Buffer,
    labels: &[&str],
    selected: Option<usize>,
    palette: &Palette,
) {
    let titles: Vec<Line> = labels.iter().map(|label| Line::from(*label)).collect();
    let validated_selection = selected.filter(|&idx| idx < labels.len());

    let tabs = Tabs::new(titles).style(palette.muted());

    // Tabs always highlights some index, so without a selection the
    // highlight looks like any other label.
    let tabs = match validated_selection {
        Some(idx) => tabs
            .highlight_style(palette.accent().add_modifier(Modifier::BOLD))
            .select(idx),
        None => tabs.highlight_style(palette.muted()),
    };

    tabs.render(area, buf);
}

/// Render the active tab's content, shifted and faded by its entry
/// animation.
pub fn render_about_body(
    area: Rect,
    buf: &mut Buffer,
    tab: Option<&AboutTab>,
    entry: TabEntry,
    palette: &Palette,
) {
    let Some(tab) = tab else {
        Paragraph::new(Span::styled("Nothing here yet.", palette.muted())).render(area, buf);
        return;
    };

    let shift = ((entry.shift / CELL_HEIGHT_PX).round().max(0.0) as u16).min(area.height);
    let body = Rect {
        y: area.y + shift,
        height: area.height - shift,
        ..area
    };

    let text = palette.faded(palette.text, entry.opacity);
    let muted = palette.faded(palette.muted, entry.opacity);
    let tags = tab
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join("  ");

    let lines = vec![
        Line::from(Span::styled(
            tab.title.as_str(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(tab.description.as_str(), text)),
        Line::default(),
        Line::from(Span::styled(tags, muted)),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(body, buf);
}
