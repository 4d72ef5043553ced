//! Syntax highlighting for code snippets using syntect + two-face.
//!
//! The syntax theme follows the page theme: base16 ocean dark or light.
//! Monochrome output skips highlighting and returns plain lines.

use crate::config::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::FontStyle;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

/// Lazy-loaded theme set containing all two-face themes.
static THEME_SET: LazyLock<EmbeddedLazyThemeSet> = LazyLock::new(two_face::theme::extra);

/// Syntax definitions, including the extra ones two-face bundles.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(two_face::syntax::extra_newlines);

/// Syntax highlighter bound to a page theme.
#[derive(Clone, Copy)]
pub struct SyntaxHighlighter {
    theme_name: Option<EmbeddedThemeName>,
}

impl SyntaxHighlighter {
    /// Highlighter using the embedded theme matching `theme`.
    pub fn new(theme: Theme) -> Self {
        let theme_name = match theme {
            Theme::Dark => EmbeddedThemeName::Base16OceanDark,
            Theme::Light => EmbeddedThemeName::Base16OceanLight,
        };
        Self {
            theme_name: Some(theme_name),
        }
    }

    /// Highlighter that never colors.
    pub fn plain() -> Self {
        Self { theme_name: None }
    }

    /// Highlight `code` written in `language` (a syntax name or extension).
    ///
    /// Unknown languages render as plain text. Returns one line per source
    /// line, without line terminators.
    pub fn highlight_code(&self, code: &str, language: &str) -> Vec<Line<'static>> {
        let Some(theme_name) = self.theme_name else {
            return plain_lines(code);
        };
        let theme = THEME_SET.get(theme_name);

        let syntax = SYNTAX_SET
            .find_syntax_by_token(language)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &SYNTAX_SET) {
                Ok(highlighted) => {
                    let spans: Vec<Span<'static>> = highlighted
                        .into_iter()
                        .map(|(style, text)| {
                            let text = text.trim_end_matches(['\n', '\r']);
                            Span::styled(text.to_string(), syntect_style_to_ratatui(style))
                        })
                        .filter(|span| !span.content.is_empty())
                        .collect();
                    lines.push(Line::from(spans));
                }
                Err(_) => {
                    // Fallback: render as plain text
                    lines.push(Line::from(line.trim_end().to_string()));
                }
            }
        }

        lines
    }
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    code.lines().map(|l| Line::from(l.to_string())).collect()
}

/// Convert syntect highlighting style to ratatui style.
fn syntect_style_to_ratatui(style: syntect::highlighting::Style) -> Style {
    let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);

    let mut ratatui_style = Style::default().fg(fg);

    if style.font_style.contains(FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
    }

    ratatui_style
}
