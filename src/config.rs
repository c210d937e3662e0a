// User configuration loaded from ~/.config/weatherbeats/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::theme::THEME_LIGHT;

/// Application configuration, deserialized from `~/.config/weatherbeats/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Target TUI refresh rate in frames per second (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Starting theme, "light" or "dark" (default: light).
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Log level for this crate's file log (default: debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub const MIN_FRAME_RATE: f64 = 1.0;
pub const MAX_FRAME_RATE: f64 = 240.0;

fn default_frame_rate() -> f64 {
    30.0
}

fn default_theme() -> String {
    THEME_LIGHT.to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            theme: default_theme(),
            log_level: default_log_level(),
        }
    }
}

impl GeneralConfig {
    /// Frame rate the tick loop actually runs at. Non-finite values fall back
    /// to the default; everything else is clamped so the tick period stays non-zero.
    pub fn effective_frame_rate(&self) -> f64 {
        clamp_frame_rate(self.frame_rate)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.effective_frame_rate())
    }
}

pub fn clamp_frame_rate(frame_rate: f64) -> f64 {
    if frame_rate.is_finite() {
        frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
    } else {
        default_frame_rate()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Simulated fetch latency in milliseconds (default: 1000).
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

impl WeatherConfig {
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

impl Config {
    /// Read config from the default location, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Like [`Config::load_from`], but a missing file is an error.
    pub fn load_required(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weatherbeats")
            .join("config.toml")
    }
}
