//! The scrolling page.
//!
//! Every element is drawn at its page position into an off-screen canvas
//! as tall as the page. The rows inside the scroll window are then copied
//! into the frame. Elements never need to know about the scroll offset.

use crate::model::{Certification, Project, Section};
use crate::state::{AppState, PageLayout, PageTarget};
use crate::view::highlighter::SyntaxHighlighter;
use crate::view::styles::Palette;
use crate::view::{card, carousel, hero, marquee, tabs};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Off-screen buffer holding the whole page in page coordinates.
#[derive(Debug)]
pub struct PageCanvas {
    buffer: Buffer,
}

impl PageCanvas {
    /// Blank canvas filled with `style`.
    pub fn new(width: u16, height: u16, style: Style) -> Self {
        let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
        buffer.set_style(buffer.area, style);
        Self { buffer }
    }

    /// The page buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The page buffer, for drawing.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Copy page rows `offset..offset + area.height` into `target` at `area`.
    pub fn blit(&self, target: &mut Buffer, area: Rect, offset: u16) {
        for row in 0..area.height {
            let Some(y) = offset.checked_add(row) else {
                break;
            };
            for column in 0..area.width {
                let (Some(from), Some(to)) = (
                    self.buffer.cell((column, y)),
                    target.cell_mut((area.x + column, area.y + row)),
                ) else {
                    continue;
                };
                *to = from.clone();
            }
        }
    }
}

/// Draw the visible part of the page into `area`.
pub fn render_page(
    area: Rect,
    buf: &mut Buffer,
    state: &AppState,
    highlighter: &SyntaxHighlighter,
    palette: &Palette,
    now: Duration,
) {
    let layout = state.layout();
    if layout.height == 0 || area.is_empty() {
        return;
    }
    let mut canvas = PageCanvas::new(layout.width, layout.height, palette.base());
    draw_page(canvas.buffer_mut(), state, highlighter, palette, now);
    canvas.blit(buf, area, state.page().offset());
}

/// Draw every page element at its page position.
pub fn draw_page(
    buf: &mut Buffer,
    state: &AppState,
    highlighter: &SyntaxHighlighter,
    palette: &Palette,
    now: Duration,
) {
    let layout = state.layout();
    let portfolio = state.portfolio();

    hero::render_hero(
        layout.hero,
        buf,
        &portfolio.profile,
        state.typewriter(),
        now,
        palette,
    );

    for (section, rect) in &layout.headings {
        render_heading(*rect, buf, *section, palette);
    }

    for (index, ((highlight, card_state), rect)) in portfolio
        .highlights
        .iter()
        .zip(state.cards())
        .zip(&layout.cards)
        .enumerate()
    {
        let focused = state.focused_card() == Some(index);
        card::render_card(*rect, buf, highlight, card_state, focused, now, palette);
    }

    let labels: Vec<&str> = portfolio.about.iter().map(|t| t.label.as_str()).collect();
    tabs::render_tab_bar(
        layout.tab_bar,
        buf,
        &labels,
        state.about_tabs().active_index(),
        palette,
    );
    let active = state
        .about_tabs()
        .active_tab()
        .and_then(|id| portfolio.about_tab(id));
    tabs::render_about_body(
        layout.about_body,
        buf,
        active,
        state.about_tabs().entry(now),
        palette,
    );

    for (index, (project, rect)) in portfolio.projects.iter().zip(&layout.projects).enumerate() {
        let focused = state.focused_project() == Some(index);
        let hovered = state.hovered() == Some(PageTarget::Project(index));
        render_project_row(*rect, buf, project, focused, hovered, palette);
    }

    let snippets = state.snippets();
    let current = snippets
        .index()
        .and_then(|i| portfolio.snippets.get(i).map(|s| (i, snippets.len(), s)));
    carousel::render_snippet_nav(layout, buf, current, state.hovered(), palette);
    carousel::render_snippet_body(
        layout.snippet_body,
        buf,
        current.map(|(_, _, s)| s),
        highlighter,
        palette,
    );
    carousel::render_snippet_controls(
        layout,
        buf,
        snippets.index(),
        state.snippet_copied(),
        state.hovered(),
        palette,
    );

    marquee::render_marquee(
        layout.testimonial_strip,
        buf,
        state.testimonial_items(),
        state.testimonials(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::ITALIC),
        palette,
    );
    marquee::render_marquee(
        layout.tech_strip,
        buf,
        &portfolio.tech_stack,
        state.tech(),
        palette.accent(),
        palette,
    );

    render_certifications(layout.certifications, buf, &portfolio.certifications, palette);
}

/// Section title followed by a rule to the edge.
fn render_heading(area: Rect, buf: &mut Buffer, section: Section, palette: &Palette) {
    let title = section.title();
    let rule = usize::from(area.width).saturating_sub(title.width() + 1);
    Paragraph::new(Line::from(vec![
        Span::styled(title, palette.accent().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled("─".repeat(rule), Style::default().fg(palette.border)),
    ]))
    .render(area, buf);
}

fn render_project_row(
    area: Rect,
    buf: &mut Buffer,
    project: &Project,
    focused: bool,
    hovered: bool,
    palette: &Palette,
) {
    let marker = if focused { "▸ " } else { "  " };
    let title_style = if focused || hovered {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, palette.accent()),
            Span::styled(project.title.as_str(), title_style),
            Span::styled(format!("  {}", project.category), palette.muted()),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(project.summary.as_str(), palette.muted()),
        ]),
    ];
    Paragraph::new(lines).render(area, buf);
}

fn render_certifications(
    area: Rect,
    buf: &mut Buffer,
    certifications: &[Certification],
    palette: &Palette,
) {
    if certifications.is_empty() {
        Paragraph::new(Span::styled("No certifications listed.", palette.muted()))
            .render(area, buf);
        return;
    }
    let lines: Vec<Line> = certifications
        .iter()
        .map(|cert| {
            Line::from(vec![
                Span::styled("✓ ", palette.accent()),
                Span::styled(cert.name.as_str(), Style::default().fg(palette.text)),
                Span::styled(
                    format!("  ·  {}  ·  {}", cert.issuer, cert.issued.format("%b %Y")),
                    palette.muted(),
                ),
            ])
        })
        .collect();
    Paragraph::new(lines).render(area, buf);
}

/// Current section: the last heading at or above the top of the window.
pub fn current_section(layout: &PageLayout, offset: u16) -> Option<Section> {
    layout
        .headings
        .iter()
        .take_while(|(_, rect)| rect.y <= offset.saturating_add(1))
        .last()
        .map(|(section, _)| *section)
}
