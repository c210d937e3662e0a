// Central coordinator: owns all components, the theme, and the mock weather source.
// Runs the event loop (key → Action → handle_action → component updates → draw).

mod fetch;
mod input;

use std::time::Duration;

use tokio::sync::mpsc;

use crate::action::Action;
use crate::components::header::Header;
use crate::components::playlist_view::PlaylistView;
use crate::components::weather_card::WeatherCard;
use crate::components::Component;
use crate::config::Config;
use crate::playlist::Playlist;
use crate::theme::Theme;
use crate::tui::{Tui, TuiEvent};
use crate::ui;
use crate::weather::{MockWeather, WeatherReading};

/// How long an error stays in the status bar.
const ERROR_DISPLAY: Duration = Duration::from_secs(5);
/// How long the play marker stays on a track row.
const PLAY_FLASH: Duration = Duration::from_secs(2);

/// Top-level coordinator: owns every component and the weather source.
/// Runs the main event loop (key → action → component update → draw).
pub struct App {
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub header: Header,
    pub weather_card: WeatherCard,
    pub playlist_view: PlaylistView,

    // State
    pub(crate) weather: MockWeather,
    pub(crate) config: Config,
    pub theme: Theme,
    pub loading: bool,
    pub frame_count: u64,
    pub show_help: bool,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut header = Header::new();
        let mut weather_card = WeatherCard::new();
        let mut playlist_view = PlaylistView::new();

        for component in [
            &mut header as &mut dyn Component,
            &mut weather_card,
            &mut playlist_view,
        ] {
            component.register_action_handler(action_tx.clone());
        }

        let weather = MockWeather::new(config.weather.refresh_delay());
        let theme = Theme::from_name(&config.general.theme);

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            header,
            weather_card,
            playlist_view,
            weather,
            config,
            theme,
            loading: false,
            frame_count: 0,
            show_help: false,
            error_message: None,
        })
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.effective_frame_rate())?;
        tui.enter()?;

        self.action_tx.send(Action::Refresh)?;

        while self.running {
            let state = ui::DrawState {
                header: &self.header,
                weather_card: &self.weather_card,
                playlist_view: &self.playlist_view,
                theme: &self.theme,
                loading: self.loading,
                frame_count: self.frame_count,
                error_message: &self.error_message,
                show_help: self.show_help,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Resize => {} // ratatui redraws at correct size automatically
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    pub async fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            Action::Quit => self.running = false,

            // Weather
            Action::Refresh => {
                if self.loading {
                    tracing::debug!("refresh ignored, reading already in flight");
                    return Ok(());
                }
                self.loading = true;
                self.header.update(&action)?;
                self.spawn_fetch_weather();
            }
            Action::WeatherLoaded(ref reading) => {
                tracing::info!(
                    location = %reading.location,
                    temperature = reading.temperature,
                    condition = %reading.condition,
                    "weather loaded"
                );
                self.loading = false;
                self.header.update(&action)?;
                self.weather_card.update(&action)?;
                self.playlist_view.update(&action)?;
            }
            Action::WeatherFailed(msg) => {
                self.loading = false;
                self.header.update(&Action::WeatherFailed(msg.clone()))?;
                self.action_tx.send(Action::ShowError(msg))?;
            }

            // Theme
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = self.theme.name(), "theme toggled");
            }

            // Decorative playback
            Action::PlayTrack(_) => {
                self.playlist_view.update(&action)?;
                let seq = self.playlist_view.play_seq();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(PLAY_FLASH).await;
                    tx.send(Action::ClearPlaying(seq)).ok();
                });
            }
            Action::ClearPlaying(_) => {
                self.playlist_view.update(&action)?;
            }

            // Errors & help
            Action::ShowError(msg) => {
                self.error_message = Some(msg);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(ERROR_DISPLAY).await;
                    tx.send(Action::ClearError).ok();
                });
            }
            Action::ClearError => self.error_message = None,
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            Action::Tick => {
                self.frame_count = self.frame_count.wrapping_add(1);
                self.header.update(&action)?;
            }
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.weather_card.reading()
    }

    pub fn playlist(&self) -> Option<&'static Playlist> {
        self.playlist_view.playlist()
    }

    #[allow(dead_code)] // used by integration tests
    pub async fn flush_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let _ = self.handle_action(action).await;
        }
    }

    /// Wait for the next queued action (e.g. a finished fetch) and handle it.
    #[allow(dead_code)] // used by integration tests
    pub async fn process_next_action(&mut self) -> anyhow::Result<Option<Action>> {
        match self.action_rx.recv().await {
            Some(action) => {
                self.handle_action(action.clone()).await?;
                Ok(Some(action))
            }
            None => Ok(None),
        }
    }
}
