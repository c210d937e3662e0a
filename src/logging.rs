// File-based logging via tracing. Writes to ~/.local/share/weatherbeats/weatherbeats.log
// since the terminal itself belongs to the TUI.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

pub const LOG_FILE: &str = "weatherbeats.log";

/// Filter directive for this crate at the configured level. Unknown levels fall back to debug.
pub fn directive(config: &Config) -> String {
    let level = match config.general.log_level.to_lowercase().as_str() {
        lvl @ ("error" | "warn" | "info" | "debug" | "trace" | "off") => lvl.to_string(),
        _ => "debug".to_string(),
    };
    format!("weatherbeats={}", level)
}

pub fn init(config: &Config) -> anyhow::Result<()> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("weatherbeats");
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = rolling::never(&data_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(EnvFilter::from_default_env().add_directive(directive(config).parse()?))
        .init();

    // The guard must outlive the program, so leak it to keep the file writer open.
    std::mem::forget(guard);
    Ok(())
}

/// Record why the config on disk was ignored. Only meaningful after [`init`].
pub fn report_config_fallback(err: &anyhow::Error) {
    tracing::warn!(
        path = %Config::config_path().display(),
        error = %err,
        "config unreadable, using defaults"
    );
}
