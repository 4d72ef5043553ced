//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_ends_with_folio_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_folio_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("folio.log"),
        "Default log path should end with 'folio.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_all_sections() {
    let config_path = write_temp(
        "folio_test_full.toml",
        r#"
theme = "light"
content_path = "/srv/site.json"
log_file_path = "/tmp/folio-test.log"

[typewriter]
type_speed_ms = 80
delete_speed_ms = 40
pause_ms = 1500
caret_blink_ms = 400

[marquee]
speed = 25.0
pause_on_hover = false

[glow]
disabled = false
proximity = 32.0
inactive_zone = 0.5
spread = 40.0
movement_duration_ms = 1000
border_width = 2
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("File exists");

    assert_eq!(config.theme, Some(Theme::Light));
    assert_eq!(config.content_path, Some(PathBuf::from("/srv/site.json")));
    let typewriter = config.typewriter.clone().expect("typewriter section");
    assert_eq!(typewriter.pause_ms, Some(1500));
    let glow = config.glow.clone().expect("glow section");
    assert_eq!(glow.border_width, Some(2));

    let resolved = merge_config(Some(config));
    assert_eq!(resolved.typewriter.type_speed, Duration::from_millis(80));
    assert_eq!(resolved.typewriter.caret_blink, Duration::from_millis(400));
    assert_eq!(resolved.marquee.speed, 25.0);
    assert!(!resolved.marquee.pause_on_hover);
    assert_eq!(resolved.glow.movement_duration, Duration::from_secs(1));
    assert_eq!(resolved.glow.inactive_zone, 0.5);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("folio_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("follow = true");
    assert!(result.is_err(), "Unknown top-level keys must be rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[glow]\nradius = 3.0");
    assert!(result.is_err(), "Unknown section keys must be rejected");
}

#[test]
fn config_file_rejects_unknown_theme() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "sepia""#);
    assert!(result.is_err());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let file: ConfigFile = toml::from_str("[typewriter]\npause_ms = 500").unwrap();
    let resolved = merge_config(Some(file));
    let defaults = TypewriterConfig::default();

    assert_eq!(resolved.typewriter.pause, Duration::from_millis(500));
    assert_eq!(resolved.typewriter.type_speed, defaults.type_speed);
    assert_eq!(resolved.typewriter.delete_speed, defaults.delete_speed);
    assert_eq!(resolved.glow, GlowConfig::card());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.content_path, None);
    assert_eq!(config.typewriter.type_speed, Duration::from_millis(100));
    assert_eq!(config.typewriter.delete_speed, Duration::from_millis(50));
    assert_eq!(config.typewriter.pause, Duration::from_millis(2000));
    assert_eq!(config.marquee.speed, 40.0);
    assert!(!config.glow.disabled);
    assert_eq!(config.glow.proximity, 64.0);
}

#[test]
fn theme_parses_case_insensitively() {
    assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
    assert!("neon".parse::<Theme>().is_err());
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(folio_theme)]
fn apply_env_overrides_respects_folio_theme() {
    let _guard = EnvGuard::new("FOLIO_THEME");
    env::set_var("FOLIO_THEME", "light");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.theme, Theme::Light, "FOLIO_THEME should override theme");
}

#[test]
#[serial(folio_theme)]
fn apply_env_overrides_ignores_unknown_theme() {
    let _guard = EnvGuard::new("FOLIO_THEME");
    env::set_var("FOLIO_THEME", "sepia");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(folio_theme)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new("FOLIO_THEME");

    let base = ResolvedConfig::default();
    assert_eq!(
        apply_env_overrides(base.clone()),
        base,
        "Config should be unchanged when FOLIO_THEME not set"
    );
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("FOLIO_CONFIG");
    let explicit = write_temp("folio_test_explicit.toml", r#"theme = "light""#);
    let from_env = write_temp("folio_test_env.toml", r#"theme = "dark""#);
    env::set_var("FOLIO_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.theme, Some(Theme::Light), "Explicit path should win");

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("FOLIO_CONFIG");
    let from_env = write_temp("folio_test_env_only.toml", r#"theme = "light""#);
    env::set_var("FOLIO_CONFIG", &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.theme, Some(Theme::Light));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_tolerates_missing_env_target() {
    let _guard = EnvGuard::new("FOLIO_CONFIG");
    env::set_var("FOLIO_CONFIG", "/nonexistent/folio/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None, false), base);
}

#[test]
fn apply_cli_overrides_all_flags() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(Theme::Light),
        Some(PathBuf::from("site.toml")),
        true,
    );

    assert_eq!(result.theme, Theme::Light);
    assert_eq!(result.content_path, Some(PathBuf::from("site.toml")));
    assert!(result.glow.disabled);
}

#[test]
#[serial(folio_theme)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new("FOLIO_THEME");

    // Defaults -> file
    let file: ConfigFile = toml::from_str(r#"theme = "light""#).unwrap();
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.theme, Theme::Light);

    // File -> env
    env::set_var("FOLIO_THEME", "dark");
    let resolved = apply_env_overrides(resolved);
    assert_eq!(resolved.theme, Theme::Dark);

    // Env -> CLI
    let resolved = apply_cli_overrides(resolved, Some(Theme::Light), None, false);
    assert_eq!(resolved.theme, Theme::Light, "CLI should win over every other source");
}
