// Weather loading: spawns the mock fetch and reports back through the action channel.

use std::future::Future;

use crate::action::Action;
use crate::app::App;
use crate::weather::WeatherReading;

pub const FETCH_FAILED: &str = "Weather fetch failed";

impl App {
    /// Spawn a background fetch task that sends the result (or an error) back as an action.
    fn spawn_fetch<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = anyhow::Result<WeatherReading>> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match fut.await {
                Ok(reading) => tx.send(Action::WeatherLoaded(reading)).ok(),
                Err(e) => {
                    tracing::error!(error = %e, "{}", FETCH_FAILED);
                    tx.send(Action::WeatherFailed(FETCH_FAILED.to_string())).ok()
                }
            };
        });
    }

    pub(super) fn spawn_fetch_weather(&self) {
        let weather = self.weather.clone();
        tracing::debug!(delay_ms = weather.delay().as_millis() as u64, "fetching weather");
        self.spawn_fetch(async move { weather.fetch().await });
    }
}
