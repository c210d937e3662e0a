// Static track catalogue and the condition -> playlist lookup.

use crate::weather::Condition;

/// A single static music recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    /// Formatted as `M:SS`.
    pub duration: &'static str,
}

pub type Playlist = [Track; 3];

const fn track(id: u32, title: &'static str, artist: &'static str, duration: &'static str) -> Track {
    Track {
        id,
        title,
        artist,
        duration,
    }
}

pub static CLEAR: Playlist = [
    track(1, "Sunny Day", "Happy Vibes", "3:24"),
    track(2, "Golden Hour", "Bright Sounds", "4:12"),
    track(3, "Summer Breeze", "Chill Wave", "3:45"),
];

pub static RAIN: Playlist = [
    track(4, "Rainy Mood", "Cozy Cafe", "4:21"),
    track(5, "Coffee & Rain", "Lo-Fi Beats", "3:55"),
    track(6, "Gentle Drops", "Calm Sounds", "5:10"),
];

pub static CLOUDS: Playlist = [
    track(7, "Cloudy Thoughts", "Dreamy Pop", "3:56"),
    track(8, "Grey Skies", "Indie Folk", "4:28"),
    track(9, "Overcast", "Mellow Tunes", "3:41"),
];

pub static SNOW: Playlist = [
    track(10, "Winter Dreams", "Peaceful Piano", "4:55"),
    track(11, "Snowfall", "Ambient Sounds", "5:33"),
    track(12, "Cozy Fireplace", "Warm Melodies", "4:18"),
];

pub static THUNDERSTORM: Playlist = [
    track(13, "Storm Energy", "Electric Beats", "3:45"),
    track(14, "Thunder Roll", "Power Rock", "4:33"),
    track(15, "Lightning", "Dynamic Sound", "3:58"),
];

/// Every group, in catalogue order.
pub static ALL: [&Playlist; 5] = [&CLEAR, &RAIN, &CLOUDS, &SNOW, &THUNDERSTORM];

/// Playlist for a parsed condition. Unrecognized labels containing "cloud"
/// get the clouds group; everything else falls back to clear.
pub fn for_condition(condition: &Condition) -> &'static Playlist {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Rain => &RAIN,
        Condition::Clouds => &CLOUDS,
        Condition::Snow => &SNOW,
        Condition::Thunderstorm => &THUNDERSTORM,
        Condition::Unrecognized(s) if s.contains("cloud") => &CLOUDS,
        Condition::Unrecognized(_) => &CLEAR,
    }
}

/// Resolve a free-form condition string (case-insensitive). Never fails.
pub fn resolve(condition: &str) -> &'static Playlist {
    for_condition(&Condition::parse(condition))
}
