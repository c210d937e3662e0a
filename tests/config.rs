// Config defaults, TOML parsing, and loading from disk.

use std::time::Duration;

use weatherbeats::config::{clamp_frame_rate, Config, MAX_FRAME_RATE, MIN_FRAME_RATE};
use weatherbeats::logging;
use weatherbeats::theme::{Theme, THEME_DARK, THEME_LIGHT};

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.general.frame_rate, 30.0);
    assert_eq!(config.general.theme, THEME_LIGHT);
    assert_eq!(config.weather.refresh_delay_ms, 1000);
    assert_eq!(config.weather.refresh_delay(), Duration::from_secs(1));
}

#[test]
fn test_config_parse_toml() {
    let toml_str = r#"
[general]
frame_rate = 60.0
theme = "dark"

[weather]
refresh_delay_ms = 250
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.general.frame_rate, 60.0);
    assert_eq!(config.general.theme, THEME_DARK);
    assert_eq!(config.weather.refresh_delay_ms, 250);
}

#[test]
fn test_config_partial_toml_fills_defaults() {
    let config: Config = toml::from_str("[general]\ntheme = \"dark\"\n").unwrap();
    assert_eq!(config.general.frame_rate, 30.0);
    assert_eq!(config.weather.refresh_delay_ms, 1000);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.general.frame_rate, 30.0);
    assert_eq!(config.general.theme, THEME_LIGHT);
}

#[test]
fn test_config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[weather]\nrefresh_delay_ms = 10\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.weather.refresh_delay(), Duration::from_millis(10));
}

#[test]
fn test_config_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nframe_rate = \"fast\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_infinite_frame_rate_falls_back_to_default() {
    let config: Config = toml::from_str("[general]\nframe_rate = inf\n").unwrap();
    assert!(config.general.frame_rate.is_infinite());
    assert_eq!(config.general.effective_frame_rate(), 30.0);
    assert!(config.general.tick_rate() > Duration::ZERO);

    let config: Config = toml::from_str("[general]\nframe_rate = nan\n").unwrap();
    assert_eq!(config.general.effective_frame_rate(), 30.0);
}

#[test]
fn test_huge_frame_rate_is_clamped() {
    let config: Config = toml::from_str("[general]\nframe_rate = 1e10\n").unwrap();
    assert_eq!(config.general.effective_frame_rate(), MAX_FRAME_RATE);
    assert!(config.general.tick_rate() > Duration::ZERO);
}

#[test]
fn test_tiny_or_negative_frame_rate_is_clamped() {
    assert_eq!(clamp_frame_rate(0.0), MIN_FRAME_RATE);
    assert_eq!(clamp_frame_rate(-5.0), MIN_FRAME_RATE);
    assert_eq!(clamp_frame_rate(60.0), 60.0);
}

#[tokio::test]
async fn test_clamped_tick_rate_drives_an_interval() {
    let config: Config = toml::from_str("[general]\nframe_rate = inf\n").unwrap();
    let tick = config.general.tick_rate();
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.tick().await;
        interval.tick().await;
    });
    assert!(handle.await.is_ok());
}

#[test]
fn test_required_config_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_required(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn test_required_config_loads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\ntheme = \"dark\"\n").unwrap();
    assert_eq!(Config::load_required(&path).unwrap().general.theme, THEME_DARK);
}

// ── Logging ──────────────────────────────────────────────────────────────────

#[test]
fn test_log_directive_follows_config() {
    let mut config = Config::default();
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(logging::directive(&config), "weatherbeats=debug");

    config.general.log_level = "WARN".to_string();
    assert_eq!(logging::directive(&config), "weatherbeats=warn");

    config.general.log_level = "chatty".to_string();
    assert_eq!(logging::directive(&config), "weatherbeats=debug");
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("weatherbeats/config.toml"));
}

// ── Theme ────────────────────────────────────────────────────────────────────

#[test]
fn test_theme_from_name() {
    assert!(Theme::from_name("dark").dark);
    assert!(!Theme::from_name("light").dark);
    assert!(!Theme::from_name("solarized").dark);
}

#[test]
fn test_theme_toggle_round_trips() {
    let light = Theme::default();
    assert_eq!(light.name(), THEME_LIGHT);
    let dark = light.toggled();
    assert_eq!(dark.name(), THEME_DARK);
    assert_eq!(dark.toggled(), light);
}

#[test]
fn test_step_colors_follow_theme() {
    let light = Theme::light();
    let dark = Theme::dark();
    for i in 0..3 {
        assert_ne!(light.steps[i], dark.steps[i]);
        assert_eq!(dark.steps[i].0, ratatui::style::Color::White);
    }
    assert_eq!(light.toggled().steps, dark.steps);
}

#[test]
fn test_condition_colors_differ_by_theme() {
    use weatherbeats::weather::Condition;
    let light = Theme::light();
    let dark = Theme::dark();
    for c in [Condition::Clear, Condition::Rain, Condition::Snow, Condition::Thunderstorm] {
        assert_ne!(light.condition_color(&c), dark.condition_color(&c));
    }
    // Clouds and anything unrecognized share the grey card
    assert_eq!(
        light.condition_color(&Condition::Clouds),
        light.condition_color(&Condition::parse("fog"))
    );
}
