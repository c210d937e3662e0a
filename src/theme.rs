// Light and dark color themes. The weather card additionally picks a
// background per condition, which also depends on the active theme.

use ratatui::style::Color;

use crate::weather::Condition;

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

/// Named color slots used by the UI chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    /// Screen background.
    pub background: Color,
    /// Panel / header background.
    pub panel: Color,
    /// Primary accent color (title, track numbers).
    pub primary: Color,
    /// Secondary accent.
    pub secondary: Color,
    /// Normal text color.
    pub text: Color,
    /// Dimmed text (artists, durations, hints).
    pub text_dim: Color,
    /// Key hints.
    pub accent: Color,
    /// Background for the selected track row.
    pub selection_bg: Color,
    pub border: Color,
    pub error: Color,
    /// Loading indicators.
    pub warning: Color,
    /// "Playing" flash on a track row.
    pub success: Color,
    /// Explainer step icons as (foreground, badge background): location, weather, music.
    pub steps: [(Color, Color); 3],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            dark: true,
            background: Color::Rgb(17, 24, 39),
            panel: Color::Rgb(31, 41, 55),
            primary: Color::Cyan,
            secondary: Color::Magenta,
            text: Color::White,
            text_dim: Color::Gray,
            accent: Color::Yellow,
            selection_bg: Color::Rgb(55, 65, 81),
            border: Color::Rgb(55, 65, 81),
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            steps: [
                (Color::White, Color::Rgb(37, 99, 235)),
                (Color::White, Color::Rgb(22, 163, 74)),
                (Color::White, Color::Rgb(147, 51, 234)),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            background: Color::Rgb(249, 250, 251),
            panel: Color::White,
            primary: Color::Blue,
            secondary: Color::Magenta,
            text: Color::Rgb(17, 24, 39),
            text_dim: Color::Rgb(75, 85, 99),
            accent: Color::Rgb(180, 120, 0),
            selection_bg: Color::Rgb(243, 244, 246),
            border: Color::Rgb(229, 231, 235),
            error: Color::Red,
            warning: Color::Rgb(180, 120, 0),
            success: Color::Rgb(0, 140, 60),
            steps: [
                (Color::Rgb(59, 130, 246), Color::Rgb(219, 234, 254)),
                (Color::Rgb(34, 197, 94), Color::Rgb(220, 252, 231)),
                (Color::Rgb(168, 85, 247), Color::Rgb(243, 232, 255)),
            ],
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            THEME_DARK => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.dark {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn name(&self) -> &'static str {
        if self.dark {
            THEME_DARK
        } else {
            THEME_LIGHT
        }
    }

    /// Icon for the theme toggle: the theme you would switch to.
    pub fn toggle_icon(&self) -> &'static str {
        if self.dark {
            "☀"
        } else {
            "☾"
        }
    }

    /// Weather card background for a condition, darker in dark mode.
    pub fn condition_color(&self, condition: &Condition) -> Color {
        match (condition, self.dark) {
            (Condition::Clear, false) => Color::Rgb(250, 204, 21),
            (Condition::Clear, true) => Color::Rgb(202, 138, 4),
            (Condition::Rain, false) => Color::Rgb(96, 165, 250),
            (Condition::Rain, true) => Color::Rgb(37, 99, 235),
            (Condition::Snow, false) => Color::Rgb(191, 219, 254),
            (Condition::Snow, true) => Color::Rgb(59, 130, 246),
            (Condition::Thunderstorm, false) => Color::Rgb(168, 85, 247),
            (Condition::Thunderstorm, true) => Color::Rgb(109, 40, 217),
            (_, false) => Color::Rgb(209, 213, 219),
            (_, true) => Color::Rgb(75, 85, 99),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
