// Static three-step explainer rendered under the main panels.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

pub const HEADING: &str = "How WeatherBeats Works";

pub const STEPS: [(&str, &str, &str); 3] = [
    (
        "⌖",
        "Detect Location",
        "Get your current location and weather conditions",
    ),
    ("☁", "Analyze Weather", "Process weather data to understand the mood"),
    ("♫", "Curate Music", "Generate perfect playlist for your weather"),
];

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", HEADING),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(theme.panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(inner);

    for (i, (icon, title, blurb)) in STEPS.iter().enumerate() {
        let (icon_fg, badge_bg) = theme.steps[i];
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", icon),
                Style::default()
                    .fg(icon_fg)
                    .bg(badge_bg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                *title,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*blurb, Style::default().fg(theme.text_dim))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            cols[i],
        );
    }
}
