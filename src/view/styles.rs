//! Theme palette.
//!
//! Terminals cannot blend, so opacity is rendered by mixing a color toward
//! the background. In monochrome mode every color is the terminal default and
//! opacity falls back to the DIM modifier.

use crate::config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Layers fainter than this are not drawn at all.
pub const VISIBLE_THRESHOLD: f64 = 0.05;

/// Colors of the glow gradient, clockwise from the top.
const GLOW_STOPS: [Color; 4] = [
    Color::Rgb(0xdd, 0x7b, 0xbb),
    Color::Rgb(0xd7, 0x9f, 0x1e),
    Color::Rgb(0x5a, 0x92, 0x2c),
    Color::Rgb(0x4c, 0x78, 0x94),
];

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on or off regardless of the environment.
    pub fn forced(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub muted: Color,
    /// Headings and selection.
    pub accent: Color,
    /// Resting borders.
    pub border: Color,
    monochrome: bool,
}

impl Palette {
    /// Palette for `theme`, or monochrome when colors are off.
    pub fn new(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(10, 10, 10),
                text: Color::Rgb(229, 229, 229),
                muted: Color::Rgb(140, 140, 140),
                accent: Color::Rgb(129, 140, 248),
                border: Color::Rgb(58, 58, 58),
                monochrome: false,
            },
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(23, 23, 23),
                muted: Color::Rgb(100, 100, 100),
                accent: Color::Rgb(79, 70, 229),
                border: Color::Rgb(212, 212, 212),
                monochrome: false,
            },
        }
    }

    /// Palette using only the terminal default colors.
    pub fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            accent: Color::Reset,
            border: Color::Reset,
            monochrome: true,
        }
    }

    /// Whether colors are off.
    pub fn is_monochrome(&self) -> bool {
        self.monochrome
    }

    /// Body text on the page background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Secondary text; DIM in monochrome.
    pub fn muted(&self) -> Style {
        let style = Style::default().fg(self.muted);
        if self.monochrome {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Accent text; BOLD in monochrome.
    pub fn accent(&self) -> Style {
        let style = Style::default().fg(self.accent);
        if self.monochrome {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// `color` seen at `opacity` over the background.
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        mix(self.background, color, opacity)
    }

    /// Foreground `color` at `opacity`, as a style.
    pub fn faded(&self, color: Color, opacity: f64) -> Style {
        if self.monochrome {
            return if opacity < 0.5 {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
        }
        Style::default().fg(self.fade(color, opacity))
    }

    /// Glow gradient color at `bearing` degrees.
    pub fn glow_color(&self, bearing: f64) -> Color {
        if self.monochrome {
            return Color::Reset;
        }
        let position = bearing.rem_euclid(360.0) / 90.0;
        let index = position.floor() as usize % GLOW_STOPS.len();
        let next = (index + 1) % GLOW_STOPS.len();
        mix(GLOW_STOPS[index], GLOW_STOPS[next], position.fract())
    }

    /// Border color lit by a glow of strength `intensity`.
    pub fn glow_border(&self, bearing: f64, intensity: f64) -> Style {
        if self.monochrome {
            return if intensity > 0.5 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
        }
        Style::default().fg(mix(self.border, self.glow_color(bearing), intensity))
    }
}

/// Linear mix from `from` to `to`. Non-RGB colors switch at the midpoint.
pub fn mix(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |a: u8, b: u8| {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
            };
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

// ===== Tests =====
