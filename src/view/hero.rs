//! Hero block: name, role, the typewriter line and the headline.

use super::constants::CARET;
use crate::model::Profile;
use crate::primitives::Typewriter;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::Duration;

/// Draw the name, role and typed tagline with its caret.
pub fn render_hero(
    area: Rect,
    buf: &mut Buffer,
    profile: &Profile,
    typewriter: &Typewriter,
    now: Duration,
    palette: &Palette,
) {
    let caret = if typewriter.caret_visible(now) {
        CARET
    } else {
        " "
    };
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            profile.name.as_str(),
            palette.accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.role.as_str(), palette.muted())),
        Line::default(),
        Line::from(vec![
            Span::styled("› ", palette.muted()),
            Span::styled(
                typewriter.visible_text(),
                Style::default().fg(palette.text),
            ),
            Span::styled(caret, palette.accent()),
        ]),
        Line::from(Span::styled(profile.headline.as_str(), palette.muted())),
    ];
    Paragraph::new(lines).render(area, buf);
}
