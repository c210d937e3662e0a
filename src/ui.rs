// Layout and rendering: header on top, weather card beside the playlist,
// the explainer panel below, plus the error bar and help overlay.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::components::header::Header;
use crate::components::playlist_view::PlaylistView;
use crate::components::weather_card::WeatherCard;
use crate::components::{how_it_works, loading, Component};
use crate::theme::Theme;

pub struct DrawState<'a> {
    pub header: &'a Header,
    pub weather_card: &'a WeatherCard,
    pub playlist_view: &'a PlaylistView,
    pub theme: &'a Theme,
    pub loading: bool,
    pub frame_count: u64,
    pub error_message: &'a Option<String>,
    pub show_help: bool,
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let theme = state.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        frame.area(),
    );

    let error_height = if state.error_message.is_some() { 1 } else { 0 };
    let outer = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(6),
        Constraint::Length(error_height),
    ])
    .split(frame.area());

    state.header.draw(frame, outer[0], theme);

    if state.loading {
        loading::draw(frame, outer[1], theme, state.frame_count);
    } else if state.weather_card.reading().is_some() {
        let main = Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .spacing(1)
            .split(outer[1]);
        let card_area = Layout::vertical([Constraint::Length(9), Constraint::Min(0)]).split(main[0]);
        state.weather_card.draw(frame, card_area[0], theme);
        state.playlist_view.draw(frame, main[1], theme);
    }

    how_it_works::draw(frame, outer[2], theme);

    if let Some(ref msg) = state.error_message {
        let error_line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(theme.error)),
            Span::styled(msg.as_str(), Style::default().fg(theme.warning)),
            Span::styled("  Press r to retry.", Style::default().fg(theme.text_dim)),
        ]);
        frame.render_widget(Paragraph::new(error_line), outer[3]);
    }

    if state.show_help {
        draw_help_overlay(frame, theme);
    }
}

fn draw_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let keybindings = [
        ("q / Esc", "Quit"),
        ("r", "Refresh weather"),
        ("t", "Toggle light/dark theme"),
        ("j / Down", "Next track"),
        ("k / Up", "Previous track"),
        ("Enter / p", "Play selected track"),
        ("?", "Toggle this help overlay"),
    ];

    let overlay_width = 44u16;
    let overlay_height = keybindings.len() as u16 + 6;
    let x = area.width.saturating_sub(overlay_width) / 2;
    let y = area.height.saturating_sub(overlay_height) / 2;
    let overlay_area = Rect::new(
        x,
        y,
        overlay_width.min(area.width),
        overlay_height.min(area.height),
    );

    frame.render_widget(Clear, overlay_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), Style::default().fg(theme.accent)),
            Span::styled(*desc, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(theme.text_dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(theme.panel));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
