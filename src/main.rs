// Entry point: parses flags, loads config, and runs the TUI.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use weatherbeats::app::App;
use weatherbeats::config::Config;
use weatherbeats::logging;
use weatherbeats::theme::THEME_DARK;

#[derive(Parser)]
#[command(name = "weatherbeats", about = "Music picks for the (mock) weather")]
struct Cli {
    /// Start in dark mode regardless of config
    #[arg(long)]
    dark: bool,

    /// Read config from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicit --config must be usable; the default location may be absent or broken.
    let (mut config, fallback) = match cli.config {
        Some(ref path) => {
            let config = Config::load_required(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (config, None)
        }
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };
    if cli.dark {
        config.general.theme = THEME_DARK.to_string();
    }

    logging::init(&config)?;
    if let Some(ref err) = fallback {
        logging::report_config_fallback(err);
    }
    tracing::info!(
        theme = %config.general.theme,
        frame_rate = config.general.effective_frame_rate(),
        "starting weatherbeats"
    );

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
