//! folio - Entry Point

use clap::Parser;
use folio::config::Theme;
use folio::model::Portfolio;
use folio::view::ColorConfig;
use std::path::PathBuf;
use tracing::{info, warn};

/// folio - a terminal portfolio with animated, pointer-reactive widgets
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse a portfolio in the terminal")]
pub struct Args {
    /// Portfolio document (TOML or JSON); the bundled sample when omitted
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Draw card borders without the pointer glow
    #[arg(long)]
    pub no_glow: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);
        folio::config::apply_cli_overrides(with_env, args.theme, args.content.clone(), args.no_glow)
    };

    folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let portfolio = match &config.content_path {
        Some(path) => Portfolio::from_path(path)?,
        None => Portfolio::builtin()?,
    };
    for warning in portfolio.validate() {
        warn!(%warning, "content check");
    }

    let colors = ColorConfig::from_env_and_args(args.no_color);
    folio::view::run(portfolio, &config, colors)?;

    Ok(())
}
