//! Page geometry in page cells.
//!
//! The page is one tall column as wide as the terminal. Row 0 is the top of
//! the hero; the viewport shows a window of it at the current scroll offset.
//! Everything here is computed from content and width alone so hit testing
//! and rendering agree on where things are.

use crate::model::{Bounds, Portfolio, Section};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Rows taken by the hero block.
pub const HERO_HEIGHT: u16 = 6;

/// Rows of one highlight card, borders included.
pub const CARD_HEIGHT: u16 = 7;

/// Minimum page width for a two-column card grid.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// Rows of the about tab body (title, description, tags).
pub const ABOUT_BODY_HEIGHT: u16 = 7;

/// Rows per project entry (title line, summary line).
pub const PROJECT_ROW_HEIGHT: u16 = 2;

/// Rows of the snippet code box, borders included.
pub const SNIPPET_BODY_HEIGHT: u16 = 14;

/// Text between marquee items, and after the last one so copies join up.
pub const MARQUEE_SEPARATOR: &str = "   ·   ";

/// Label of the carousel's back arrow.
pub const PREV_LABEL: &str = "‹ prev";

/// Label of the carousel's forward arrow.
pub const NEXT_LABEL: &str = "next ›";

/// Label of the snippet copy button.
pub const COPY_LABEL: &str = "copy (y)";

/// Copy button label shortly after a copy.
pub const COPIED_LABEL: &str = "copied ✓";

const MARGIN: u16 = 1;
const CARD_GAP: u16 = 2;

/// Where every interactive element sits on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width in cells.
    pub width: u16,
    /// Total page height in rows.
    pub height: u16,
    /// Name, role and typed tagline.
    pub hero: Rect,
    /// Heading row of each section, in page order.
    pub headings: Vec<(Section, Rect)>,
    /// Skill cards, one rect per card.
    pub cards: Vec<Rect>,
    /// Row holding the about tab labels.
    pub tab_bar: Rect,
    /// Clickable extent of each tab label, padding included.
    pub tabs: Vec<Rect>,
    /// Body of the selected about tab.
    pub about_body: Rect,
    /// Project rows, one rect per project.
    pub projects: Vec<Rect>,
    /// Previous snippet button.
    pub snippet_prev: Rect,
    /// Next snippet button.
    pub snippet_next: Rect,
    /// Title and position of the current snippet.
    pub snippet_title: Rect,
    /// Highlighted code of the current snippet.
    pub snippet_body: Rect,
    /// Numbered snippet pickers on the bottom border of the code box.
    pub snippet_picks: Vec<Rect>,
    /// Copy button on the top border of the code box.
    pub snippet_copy: Rect,
    /// Testimonial ticker row.
    pub testimonial_strip: Rect,
    /// Tech stack ticker row.
    pub tech_strip: Rect,
    /// Certification list.
    pub certifications: Rect,
}

impl PageLayout {
    /// Lay out `portfolio` for a page `width` cells wide.
    pub fn compute(portfolio: &Portfolio, width: u16) -> Self {
        let width = width.max(1);
        let inner_x = MARGIN.min(width - 1);
        let inner_width = width.saturating_sub(2 * MARGIN).max(1);
        let mut layout = Self {
            width,
            ..Self::default()
        };
        let mut y = 0u16;

        layout.hero = Rect::new(inner_x, y, inner_width, HERO_HEIGHT);
        y = y.saturating_add(HERO_HEIGHT);

        // Highlights
        y = layout.heading(Section::Highlights, inner_x, y, inner_width);
        let columns = if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let card_width = (inner_width.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(1);
        for (i, _) in portfolio.highlights.iter().enumerate() {
            let column = (i % usize::from(columns)) as u16;
            let row = (i / usize::from(columns)) as u16;
            layout.cards.push(Rect::new(
                inner_x + column * (card_width + CARD_GAP),
                y.saturating_add(row.saturating_mul(CARD_HEIGHT + 1)),
                card_width,
                CARD_HEIGHT,
            ));
        }
        let card_rows = portfolio.highlights.len().div_ceil(usize::from(columns)) as u16;
        y = y.saturating_add(card_rows.saturating_mul(CARD_HEIGHT + 1));

        // About
        y = layout.heading(Section::About, inner_x, y, inner_width);
        layout.tab_bar = Rect::new(inner_x, y, inner_width, 1);
        layout.tabs = tab_hit_rects(
            layout.tab_bar,
            portfolio.about.iter().map(|t| t.label.as_str()),
        );
        y = y.saturating_add(2);
        layout.about_body = Rect::new(inner_x, y, inner_width, ABOUT_BODY_HEIGHT);
        y = y.saturating_add(ABOUT_BODY_HEIGHT);

        // Projects
        y = layout.heading(Section::Projects, inner_x, y, inner_width);
        for _ in &portfolio.projects {
            layout
                .projects
                .push(Rect::new(inner_x, y, inner_width, PROJECT_ROW_HEIGHT));
            y = y.saturating_add(PROJECT_ROW_HEIGHT);
        }

        // Snippets
        y = layout.heading(Section::Snippets, inner_x, y, inner_width);
        let prev_width = PREV_LABEL.width() as u16;
        let next_width = NEXT_LABEL.width() as u16;
        layout.snippet_prev = Rect::new(inner_x, y, prev_width.min(inner_width), 1);
        let next_x = (inner_x + inner_width).saturating_sub(next_width);
        layout.snippet_next = Rect::new(next_x, y, next_width.min(inner_width), 1);
        let title_x = inner_x + prev_width + 2;
        layout.snippet_title = Rect::new(
            title_x,
            y,
            next_x.saturating_sub(title_x).saturating_sub(2),
            1,
        );
        y = y.saturating_add(1);
        layout.snippet_body = Rect::new(inner_x, y, inner_width, SNIPPET_BODY_HEIGHT);
        if !portfolio.snippets.is_empty() {
            layout.place_snippet_controls(portfolio.snippets.len());
        }
        y = y.saturating_add(SNIPPET_BODY_HEIGHT);

        // Testimonials
        y = layout.heading(Section::Testimonials, 0, y, width);
        layout.testimonial_strip = Rect::new(0, y, width, 1);
        y = y.saturating_add(1);

        // Skills
        y = layout.heading(Section::Skills, 0, y, width);
        layout.tech_strip = Rect::new(0, y, width, 1);
        y = y.saturating_add(2);
        let cert_rows = (portfolio.certifications.len() as u16).max(1);
        layout.certifications = Rect::new(inner_x, y, inner_width, cert_rows);
        y = y.saturating_add(cert_rows).saturating_add(1);

        layout.height = y;
        layout
    }

    /// Pickers sit on the left half of the code box's bottom border, clear
    /// of the corner; the copy button sits on the top border, flush right.
    fn place_snippet_controls(&mut self, count: usize) {
        let body = self.snippet_body;
        let bottom = body.y + body.height.saturating_sub(1);
        let bar = Rect::new(body.x + 2, bottom, (body.width / 2).saturating_sub(2), 1);
        let labels: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
        self.snippet_picks = tab_hit_rects(bar, labels.iter().map(String::as_str));

        let width = COPY_LABEL.width().max(COPIED_LABEL.width()) as u16 + 2;
        if body.width > width + 4 {
            self.snippet_copy = Rect::new(body.right() - width - 2, body.y, width, 1);
        }
    }

    /// Blank row, then a heading row. Returns the row after the heading.
    fn heading(&mut self, section: Section, x: u16, y: u16, width: u16) -> u16 {
        let row = y.saturating_add(1);
        self.headings.push((section, Rect::new(x, row, width, 1)));
        row.saturating_add(1)
    }

    /// Top row of `section`'s heading.
    pub fn section_top(&self, section: Section) -> Option<u16> {
        self.headings
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, rect)| rect.y)
    }
}

/// Card box in virtual pixels, for the glow.
pub fn rect_bounds(rect: Rect) -> Bounds {
    Bounds::from_cells(rect.x, rect.y, rect.width, rect.height)
}

/// Hit rects for a ratatui `Tabs` row with default padding and divider.
///
/// Each label is drawn as `" label "` followed by a one-cell divider, so a
/// tab owns its label plus both padding cells.
pub fn tab_hit_rects<'a>(bar: Rect, labels: impl IntoIterator<Item = &'a str>) -> Vec<Rect> {
    let right = bar.x.saturating_add(bar.width);
    let mut x = bar.x;
    let mut rects = Vec::new();
    for label in labels {
        if x >= right {
            break;
        }
        let width = (label.width() as u16).saturating_add(2);
        let clipped = width.min(right - x);
        rects.push(Rect::new(x, bar.y, clipped, 1));
        x = x.saturating_add(width).saturating_add(1);
    }
    rects
}

/// One marquee copy per testimonial.
pub fn testimonial_items(portfolio: &Portfolio) -> Vec<String> {
    portfolio
        .testimonials
        .iter()
        .map(|t| format!("“{}”  {}, {}", t.quote, t.author, t.role))
        .collect()
}

/// Display width of one marquee copy: every item plus its separator.
pub fn marquee_copy_width(items: &[String]) -> usize {
    items
        .iter()
        .map(|item| item.width() + MARQUEE_SEPARATOR.width())
        .sum()
}

/// Columns of one copy that fit in a drawable row. Columns past this stay
/// blank while the strip keeps moving over the full measured width.
pub fn marquee_track_width(copy_width: usize) -> u16 {
    u16::try_from(copy_width).unwrap_or(u16::MAX)
}
