// Mock weather generation and the async fetch wrapper.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use weatherbeats::weather::{
    self, Condition, MockWeather, CONDITIONS, DESCRIPTION, LOCATIONS, MAX_TEMPERATURE,
    MIN_TEMPERATURE,
};

#[test]
fn test_generated_reading_fields_are_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let reading = weather::generate(&mut rng);
        assert!(
            (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&reading.temperature),
            "temperature {} out of range",
            reading.temperature
        );
        assert!(LOCATIONS.contains(&reading.location.as_str()));
        assert!(CONDITIONS.contains(&reading.condition));
        assert_eq!(reading.description, "Current weather");
    }
}

#[test]
fn test_generator_covers_every_condition_and_location() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut conditions = HashSet::new();
    let mut locations = HashSet::new();
    for _ in 0..500 {
        let reading = weather::generate(&mut rng);
        conditions.insert(reading.condition);
        locations.insert(reading.location);
    }
    assert_eq!(conditions.len(), 5);
    assert_eq!(locations.len(), 5);
}

#[test]
fn test_generated_condition_is_never_unrecognized() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        assert!(!matches!(
            weather::generate(&mut rng).condition,
            Condition::Unrecognized(_)
        ));
    }
}

#[test]
fn test_condition_display_uses_lowercase_label() {
    assert_eq!(Condition::Thunderstorm.to_string(), "thunderstorm");
    assert_eq!(Condition::parse("Partly Cloudy").to_string(), "partly cloudy");
}

#[test]
fn test_condition_icons() {
    assert_eq!(Condition::Clear.icon(), "☀");
    assert_eq!(Condition::Snow.icon(), "❄");
    assert_eq!(Condition::Clouds.icon(), "☁");
    assert_eq!(Condition::parse("fog").icon(), "☁");
}

#[test]
fn test_default_mock_delay_is_one_second() {
    assert_eq!(MockWeather::default().delay(), Duration::from_secs(1));
}

#[tokio::test]
async fn test_fetch_returns_valid_reading() {
    let source = MockWeather::new(Duration::ZERO);
    let reading = source.fetch().await.unwrap();
    assert!(LOCATIONS.contains(&reading.location.as_str()));
    assert_eq!(reading.description, DESCRIPTION);
}

#[tokio::test]
async fn test_fetch_waits_for_delay() {
    let source = MockWeather::new(Duration::from_millis(50));
    let started = std::time::Instant::now();
    source.fetch().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}
