// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use crate::weather::WeatherReading;

/// All events flowing through the app: user actions, async results, and
/// internal signals. The [`App`](crate::app::App) event loop dispatches
/// each variant to the appropriate handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    Refresh,
    WeatherLoaded(WeatherReading),
    WeatherFailed(String),

    ToggleTheme,

    /// Decorative play affordance on a playlist row (index into the playlist).
    PlayTrack(usize),
    /// Clears the play marker set by the press with this sequence number.
    ClearPlaying(u64),

    ShowError(String),
    ClearError,
    ShowHelp,
    HideHelp,
    Tick,
}
