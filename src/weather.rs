// Mock weather source: samples a reading from fixed conditions, locations,
// and a temperature range, then waits a short cosmetic delay before handing it over.

use std::fmt;
use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

pub const LOCATIONS: [&str; 5] = ["New York", "London", "Tokyo", "Paris", "Sydney"];

pub const CONDITIONS: [Condition; 5] = [
    Condition::Clear,
    Condition::Rain,
    Condition::Clouds,
    Condition::Snow,
    Condition::Thunderstorm,
];

pub const DESCRIPTION: &str = "Current weather";

pub const MIN_TEMPERATURE: i32 = -5;
pub const MAX_TEMPERATURE: i32 = 29;

/// Number of distinct temperatures the generator can produce.
const TEMPERATURE_SPAN: f64 = 35.0;

/// Weather condition driving playlist selection. Anything outside the five
/// known labels is kept verbatim (lower-cased) in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Rain,
    Clouds,
    Snow,
    Thunderstorm,
    Unrecognized(String),
}

impl Condition {
    /// Case-insensitive parse. Only exact label matches are recognized.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        match lower.as_str() {
            "clear" => Self::Clear,
            "rain" => Self::Rain,
            "clouds" => Self::Clouds,
            "snow" => Self::Snow,
            "thunderstorm" => Self::Thunderstorm,
            _ => Self::Unrecognized(lower),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Clouds => "clouds",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Unrecognized(s) => s,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Rain => "🌧",
            Self::Snow => "❄",
            Self::Thunderstorm => "⚡",
            Self::Clouds | Self::Unrecognized(_) => "☁",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated weather snapshot. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub location: String,
    /// Degrees Celsius, always within `MIN_TEMPERATURE..=MAX_TEMPERATURE`.
    pub temperature: i32,
    pub condition: Condition,
    pub description: String,
}

/// Sample a fresh reading. Takes any RNG so tests can seed it.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> WeatherReading {
    let location = LOCATIONS.choose(rng).copied().unwrap_or(LOCATIONS[0]);
    let condition = CONDITIONS.choose(rng).cloned().unwrap_or(Condition::Clear);
    let temperature = (rng.random::<f64>() * TEMPERATURE_SPAN).floor() as i32 + MIN_TEMPERATURE;

    WeatherReading {
        location: location.to_string(),
        temperature,
        condition,
        description: DESCRIPTION.to_string(),
    }
}

/// Stand-in for a weather API: produces a random reading after `delay`.
#[derive(Debug, Clone)]
pub struct MockWeather {
    delay: Duration,
}

impl MockWeather {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn fetch(&self) -> anyhow::Result<WeatherReading> {
        let reading = generate(&mut rand::rng());
        tokio::time::sleep(self.delay).await;
        Ok(reading)
    }
}

impl Default for MockWeather {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}
