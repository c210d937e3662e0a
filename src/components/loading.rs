// Placeholder shown while a reading is being generated.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::components::spinner_frame;
use crate::theme::Theme;

pub const LOADING_TEXT: &str = "Getting weather data...";

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme, frame_count: u64) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    let lines = vec![
        Line::from(Span::styled(
            spinner_frame(frame_count),
            Style::default().fg(theme.primary),
        )),
        Line::from(""),
        Line::from(Span::styled(LOADING_TEXT, Style::default().fg(theme.text))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}
