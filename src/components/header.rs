// Top bar: app title on the left, theme toggle and refresh hints on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::{spinner_frame, Component};
use crate::theme::Theme;

pub const TITLE: &str = "WeatherBeats";

#[derive(Default)]
pub struct Header {
    loading: bool,
    frame_count: u64,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Component for Header {
    fn register_action_handler(&mut self, _tx: UnboundedSender<Action>) {}

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::Tick => self.frame_count = self.frame_count.wrapping_add(1),
            Action::Refresh => self.loading = true,
            Action::WeatherLoaded(_) | Action::WeatherFailed(_) => self.loading = false,
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(34)]).split(inner);

        let title = Line::from(vec![
            Span::styled(" ♫ ", Style::default().fg(theme.secondary)),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), cols[0]);

        let refresh_icon = if self.loading {
            spinner_frame(self.frame_count)
        } else {
            "⟳"
        };
        let refresh_style = if self.loading {
            Style::default().fg(theme.text_dim)
        } else {
            Style::default().fg(theme.primary)
        };
        let hints = Line::from(vec![
            Span::styled("t ", Style::default().fg(theme.accent)),
            Span::styled(theme.toggle_icon(), Style::default().fg(theme.text)),
            Span::styled("  │  ", Style::default().fg(theme.border)),
            Span::styled("r ", Style::default().fg(theme.accent)),
            Span::styled(format!("{} Refresh", refresh_icon), refresh_style),
            Span::styled("  │  ", Style::default().fg(theme.border)),
            Span::styled("? ", Style::default().fg(theme.accent)),
            Span::styled("Help ", Style::default().fg(theme.text_dim)),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), cols[1]);
    }
}
