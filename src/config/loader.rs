//! Configuration file loading with precedence handling.

use crate::primitives::{GlowConfig, MarqueeConfig, TypewriterConfig};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text. The default.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Color scheme, "dark" or "light".
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Portfolio content document (TOML or JSON).
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Hero typewriter timing.
    #[serde(default)]
    pub typewriter: Option<TypewriterSection>,

    /// Testimonial and tech strip scrolling.
    #[serde(default)]
    pub marquee: Option<MarqueeSection>,

    /// Card glow tuning.
    #[serde(default)]
    pub glow: Option<GlowSection>,
}

/// `[typewriter]` section. Times in milliseconds.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TypewriterSection {
    /// Delay between typed characters.
    pub type_speed_ms: Option<u64>,
    /// Delay between deleted characters.
    pub delete_speed_ms: Option<u64>,
    /// Hold time on a fully typed phrase.
    pub pause_ms: Option<u64>,
    /// Caret on/off half-period.
    pub caret_blink_ms: Option<u64>,
}

/// `[marquee]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MarqueeSection {
    /// Virtual pixels per second.
    pub speed: Option<f64>,
    /// Freeze a strip while the pointer is over it.
    pub pause_on_hover: Option<bool>,
}

/// `[glow]` section, applied to the highlight cards.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GlowSection {
    /// Turn pointer tracking off entirely.
    pub disabled: Option<bool>,
    /// Activation distance outside the card, in virtual pixels.
    pub proximity: Option<f64>,
    /// Dead-zone fraction around the card center.
    pub inactive_zone: Option<f64>,
    /// Arc spread in degrees.
    pub spread: Option<f64>,
    /// Time for the arc to settle on a new bearing.
    pub movement_duration_ms: Option<u64>,
    /// Border weight: 1 rounded, 2 thick, 3 double.
    pub border_width: Option<u16>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Color scheme.
    pub theme: Theme,
    /// `None` means the builtin portfolio.
    pub content_path: Option<PathBuf>,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
    /// Hero typewriter timing.
    pub typewriter: TypewriterConfig,
    /// Strip speed and hover behavior.
    pub marquee: MarqueeConfig,
    /// Card glow tuning.
    pub glow: GlowConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            content_path: None,
            log_file_path: default_log_path(),
            typewriter: TypewriterConfig::default(),
            marquee: MarqueeConfig::default(),
            glow: GlowConfig::card(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var("FOLIO_CONFIG") {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_THEME`: Override theme. Unknown names are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("FOLIO_THEME") {
        match raw.parse() {
            Ok(theme) => config.theme = theme,
            Err(reason) => warn!(%reason, "ignoring FOLIO_THEME"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        content_path: config.content_path.or(defaults.content_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        typewriter: merge_typewriter(defaults.typewriter, config.typewriter),
        marquee: merge_marquee(defaults.marquee, config.marquee),
        glow: merge_glow(defaults.glow, config.glow),
    }
}

fn merge_typewriter(base: TypewriterConfig, section: Option<TypewriterSection>) -> TypewriterConfig {
    let Some(s) = section else {
        return base;
    };
    TypewriterConfig {
        type_speed: s.type_speed_ms.map(Duration::from_millis).unwrap_or(base.type_speed),
        delete_speed: s
            .delete_speed_ms
            .map(Duration::from_millis)
            .unwrap_or(base.delete_speed),
        pause: s.pause_ms.map(Duration::from_millis).unwrap_or(base.pause),
        caret_blink: s
            .caret_blink_ms
            .map(Duration::from_millis)
            .unwrap_or(base.caret_blink),
    }
}

fn merge_marquee(base: MarqueeConfig, section: Option<MarqueeSection>) -> MarqueeConfig {
    let Some(s) = section else {
        return base;
    };
    MarqueeConfig {
        speed: s.speed.unwrap_or(base.speed),
        pause_on_hover: s.pause_on_hover.unwrap_or(base.pause_on_hover),
        ..base
    }
}

fn merge_glow(base: GlowConfig, section: Option<GlowSection>) -> GlowConfig {
    let Some(s) = section else {
        return base;
    };
    GlowConfig {
        disabled: s.disabled.unwrap_or(base.disabled),
        proximity: s.proximity.unwrap_or(base.proximity),
        inactive_zone: s.inactive_zone.unwrap_or(base.inactive_zone),
        spread: s.spread.unwrap_or(base.spread),
        movement_duration: s
            .movement_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(base.movement_duration),
        border_width: s.border_width.unwrap_or(base.border_width),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `theme_override` - Theme from `--theme`
/// * `content_override` - Content document from `--content`
/// * `no_glow` - `--no-glow` was passed
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<Theme>,
    content_override: Option<PathBuf>,
    no_glow: bool,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    if let Some(path) = content_override {
        config.content_path = Some(path);
    }

    if no_glow {
        config.glow.disabled = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
