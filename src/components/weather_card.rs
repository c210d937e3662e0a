// Weather card: location, condition icon, temperature and description on a
// background picked from the condition and active theme.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;
use crate::weather::WeatherReading;

#[derive(Default)]
pub struct WeatherCard {
    reading: Option<WeatherReading>,
}

impl WeatherCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }
}

/// "current weather" -> "Current Weather".
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Component for WeatherCard {
    fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) {}

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::WeatherLoaded(reading) = action {
            self.reading = Some(reading.clone());
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(ref reading) = self.reading else {
            return;
        };

        let bg = theme.condition_color(&reading.condition);
        let fg = Color::White;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(bg))
            .style(Style::default().bg(bg).fg(fg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

        let top = Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).split(rows[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" ⌖ "),
                Span::styled(
                    reading.location.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])),
            top[0],
        );
        frame.render_widget(Paragraph::new(reading.condition.icon()), top[1]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{}°C", reading.temperature),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new(capitalize_words(&reading.description)).alignment(Alignment::Center),
            rows[3],
        );
    }
}
