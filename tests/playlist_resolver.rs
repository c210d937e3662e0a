// Condition -> playlist resolution: known labels, the "cloud" substring rule,
// and the clear fallback.

use weatherbeats::playlist::{self, Track, ALL, CLEAR, CLOUDS, RAIN, SNOW, THUNDERSTORM};
use weatherbeats::weather::Condition;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn titles(tracks: &[Track]) -> Vec<&'static str> {
    tracks.iter().map(|t| t.title).collect()
}

// ── Known labels ─────────────────────────────────────────────────────────────

#[test]
fn test_known_labels_resolve_to_their_group() {
    assert_eq!(playlist::resolve("clear"), &CLEAR);
    assert_eq!(playlist::resolve("rain"), &RAIN);
    assert_eq!(playlist::resolve("clouds"), &CLOUDS);
    assert_eq!(playlist::resolve("snow"), &SNOW);
    assert_eq!(playlist::resolve("thunderstorm"), &THUNDERSTORM);
}

#[test]
fn test_known_labels_keep_stored_order() {
    assert_eq!(
        titles(playlist::resolve("rain")),
        vec!["Rainy Mood", "Coffee & Rain", "Gentle Drops"]
    );
    assert_eq!(
        titles(playlist::resolve("snow")),
        vec!["Winter Dreams", "Snowfall", "Cozy Fireplace"]
    );
}

#[test]
fn test_resolution_is_case_insensitive() {
    for raw in ["Clear", "CLEAR", "clear", "cLeAr"] {
        assert_eq!(playlist::resolve(raw), &CLEAR, "input {:?}", raw);
    }
    assert_eq!(playlist::resolve("SNOW"), &SNOW);
}

#[test]
fn test_thunderstorm_end_to_end() {
    assert_eq!(
        titles(playlist::resolve("Thunderstorm")),
        vec!["Storm Energy", "Thunder Roll", "Lightning"]
    );
}

// ── Fallbacks ────────────────────────────────────────────────────────────────

#[test]
fn test_cloud_substring_maps_to_clouds() {
    for raw in ["partly cloudy", "cloud", "Cloudy", "overcast clouds", "thundercloud"] {
        assert_eq!(playlist::resolve(raw), &CLOUDS, "input {:?}", raw);
    }
    assert_eq!(
        titles(playlist::resolve("partly cloudy")),
        vec!["Cloudy Thoughts", "Grey Skies", "Overcast"]
    );
}

#[test]
fn test_unknown_conditions_fall_back_to_clear() {
    for raw in ["", "fog", "haze", "sunny", "drizzle", "clouds ", "snowy"] {
        let expected = if raw.contains("cloud") { &CLOUDS } else { &CLEAR };
        assert_eq!(playlist::resolve(raw), expected, "input {:?}", raw);
    }
    assert_eq!(
        titles(playlist::resolve("sunny")),
        vec!["Sunny Day", "Golden Hour", "Summer Breeze"]
    );
}

#[test]
fn test_for_condition_matches_string_resolution() {
    let cases = [
        Condition::Clear,
        Condition::Rain,
        Condition::Clouds,
        Condition::Snow,
        Condition::Thunderstorm,
        Condition::Unrecognized("mostly cloudy".to_string()),
        Condition::Unrecognized("mist".to_string()),
    ];
    for c in &cases {
        assert_eq!(playlist::for_condition(c), playlist::resolve(c.label()));
    }
}

// ── Catalogue ────────────────────────────────────────────────────────────────

#[test]
fn test_catalogue_has_fifteen_unique_tracks() {
    let mut ids: Vec<u32> = ALL.iter().flat_map(|group| group.iter().map(|t| t.id)).collect();
    assert_eq!(ids.len(), 15);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
}

#[test]
fn test_durations_are_minutes_and_seconds() {
    for track in ALL.iter().flat_map(|group| group.iter()) {
        let (mins, secs) = track
            .duration
            .split_once(':')
            .unwrap_or_else(|| panic!("bad duration {}", track.duration));
        assert!(mins.parse::<u32>().is_ok());
        assert_eq!(secs.len(), 2);
        assert!(secs.parse::<u32>().unwrap() < 60);
    }
}

#[test]
fn test_resolved_playlist_is_always_a_whole_group() {
    for raw in ["clear", "rain", "x", "cloudburst", "SNOW", "Thunderstorm", ""] {
        let resolved = playlist::resolve(raw);
        assert!(ALL.iter().any(|group| std::ptr::eq(*group, resolved)));
    }
}
