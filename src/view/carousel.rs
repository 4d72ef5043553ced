//! Code snippet carousel: a navigation row and the current snippet.

use crate::model::CodeSnippet;
use crate::state::page_layout::{COPIED_LABEL, COPY_LABEL, NEXT_LABEL, PREV_LABEL};
use crate::state::{PageLayout, PageTarget};
use crate::view::highlighter::SyntaxHighlighter;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Draw the `‹ prev`, title and `next ›` row.
pub fn render_snippet_nav(
    layout: &PageLayout,
    buf: &mut Buffer,
    snippet: Option<(usize, usize, &CodeSnippet)>,
    hovered: Option<PageTarget>,
    palette: &Palette,
) {
    let Some((index, len, snippet)) = snippet else {
        return;
    };
    let arrow = |target: PageTarget| {
        if hovered == Some(target) {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            palette.muted()
        }
    };
    Paragraph::new(Span::styled(PREV_LABEL, arrow(PageTarget::SnippetPrev)))
        .render(layout.snippet_prev, buf);
    Paragraph::new(Span::styled(NEXT_LABEL, arrow(PageTarget::SnippetNext)))
        .render(layout.snippet_next, buf);

    let title = Line::from(vec![
        Span::styled(
            snippet.title.as_str(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}/{}", index + 1, len), palette.muted()),
    ]);
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .render(layout.snippet_title, buf);
}

/// Draw the numbered pickers and the copy button over the code box border.
///
/// Call after [`render_snippet_body`]; both controls overwrite border cells.
pub fn render_snippet_controls(
    layout: &PageLayout,
    buf: &mut Buffer,
    current: Option<usize>,
    copied: bool,
    hovered: Option<PageTarget>,
    palette: &Palette,
) {
    if current.is_none() {
        return;
    }
    for (index, rect) in layout.snippet_picks.iter().enumerate() {
        let style = if current == Some(index) {
            palette.accent().add_modifier(Modifier::REVERSED)
        } else if hovered == Some(PageTarget::Snippet(index)) {
            palette.accent()
        } else {
            palette.muted()
        };
        Paragraph::new(Span::styled(format!(" {} ", index + 1), style)).render(*rect, buf);
    }

    let (label, style) = if copied {
        (COPIED_LABEL, palette.accent().add_modifier(Modifier::BOLD))
    } else if hovered == Some(PageTarget::SnippetCopy) {
        (COPY_LABEL, palette.accent())
    } else {
        (COPY_LABEL, palette.muted())
    };
    Paragraph::new(Span::styled(format!(" {label} "), style))
        .alignment(Alignment::Right)
        .render(layout.snippet_copy, buf);
}

/// Draw the current snippet, highlighted, in a box.
pub fn render_snippet_body(
    area: Rect,
    buf: &mut Buffer,
    snippet: Option<&CodeSnippet>,
    highlighter: &SyntaxHighlighter,
    palette: &Palette,
) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));

    let Some(snippet) = snippet else {
        Paragraph::new(Span::styled("No snippets yet.", palette.muted()))
            .block(block)
            .render(area, buf);
        return;
    };

    let tags = snippet
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");
    let block = block
        .title(Span::styled(format!(" {} ", snippet.language), palette.accent()))
        .title_bottom(Line::from(Span::styled(format!(" {tags} "), palette.muted())).right_aligned());

    let mut lines = vec![
        Line::from(Span::styled(snippet.description.as_str(), palette.muted())),
        Line::default(),
    ];
    lines.extend(highlighter.highlight_code(&snippet.code, &snippet.language));

    Paragraph::new(lines).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Portfolio;

    fn snippet() -> CodeSnippet {
        CodeSnippet {
            title: "Retry".into(),
            description: "Backoff helper".into(),
            language: "rust".into(),
            tags: vec!["async".into()],
            code: "fn retry() {}\n".into(),
        }
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn body_shows_description_then_code() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_snippet_body(
            area,
            &mut buf,
            Some(&snippet()),
            &SyntaxHighlighter::plain(),
            &Palette::monochrome(),
        );

        insta::assert_snapshot!(rows(&buf).join("\n"), @r"
        ╭ rust ──────────────────────╮
        │Backoff helper              │
        │                            │
        │fn retry() {}               │
        │                            │
        ╰──────────────────── #async ╯
        ");
    }

    #[test]
    fn empty_carousel_shows_placeholder() {
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);

        render_snippet_body(
            area,
            &mut buf,
            None,
            &SyntaxHighlighter::plain(),
            &Palette::monochrome(),
        );

        assert!(rows(&buf)[1].contains("No snippets yet."));
    }

    #[test]
    fn nav_row_shows_arrows_and_position() {
        let portfolio = Portfolio::builtin().unwrap();
        let layout = PageLayout::compute(&portfolio, 60);
        let mut buf = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));
        let len = portfolio.snippets.len();

        render_snippet_nav(
            &layout,
            &mut buf,
            Some((0, len, &portfolio.snippets[0])),
            None,
            &Palette::monochrome(),
        );

        let row = &rows(&buf)[usize::from(layout.snippet_prev.y)];
        assert!(row.contains(PREV_LABEL));
        assert!(row.contains(NEXT_LABEL));
        assert!(row.contains(&format!("1/{len}")));
    }

    #[test]
    fn controls_number_each_snippet_and_offer_copy() {
        let portfolio = Portfolio::builtin().unwrap();
        let layout = PageLayout::compute(&portfolio, 60);
        let mut buf = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));

        render_snippet_controls(&layout, &mut buf, Some(1), false, None, &Palette::monochrome());

        let bottom = &rows(&buf)[usize::from(layout.snippet_picks[0].y)];
        assert!(bottom.contains(" 1   2   3 "));
        let selected = layout.snippet_picks[1];
        assert!(buf[(selected.x + 1, selected.y)]
            .modifier
            .contains(Modifier::REVERSED));
        let top = &rows(&buf)[usize::from(layout.snippet_copy.y)];
        assert!(top.contains(COPY_LABEL));
    }

    #[test]
    fn copy_button_confirms_a_copy() {
        let portfolio = Portfolio::builtin().unwrap();
        let layout = PageLayout::compute(&portfolio, 60);
        let mut buf = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));

        render_snippet_controls(&layout, &mut buf, Some(0), true, None, &Palette::monochrome());

        let top = &rows(&buf)[usize::from(layout.snippet_copy.y)];
        assert!(top.contains(COPIED_LABEL));
        assert!(!top.contains(COPY_LABEL));
    }
}
