// Playlist panel: the three tracks resolved for the current condition.
// Selection moves with j/k; Enter or p flashes a play marker and does nothing else.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::components::Component;
use crate::playlist::{self, Playlist, Track};
use crate::theme::Theme;
use crate::weather::Condition;

pub struct PlaylistView {
    action_tx: Option<UnboundedSender<Action>>,
    condition: Option<Condition>,
    tracks: Option<&'static Playlist>,
    pub state: ListState,
    /// Row currently showing the play marker.
    playing: Option<usize>,
    /// Bumped on every play press; only the latest press may clear the marker.
    play_seq: u64,
}

impl PlaylistView {
    pub fn new() -> Self {
        Self {
            action_tx: None,
            condition: None,
            tracks: None,
            state: ListState::default(),
            playing: None,
            play_seq: 0,
        }
    }

    /// Swap in the playlist for a new condition and reset selection.
    pub fn set_condition(&mut self, condition: &Condition) {
        self.tracks = Some(playlist::for_condition(condition));
        self.condition = Some(condition.clone());
        self.state.select(Some(0));
        self.playing = None;
    }

    pub fn tracks(&self) -> &[Track] {
        self.tracks.map(|t| t.as_slice()).unwrap_or(&[])
    }

    pub fn playlist(&self) -> Option<&'static Playlist> {
        self.tracks
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.state.selected().and_then(|i| self.tracks().get(i))
    }

    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    pub fn play_seq(&self) -> u64 {
        self.play_seq
    }

    pub fn heading(&self) -> String {
        match self.condition {
            Some(ref c) => format!("Perfect for {} weather", c),
            None => String::new(),
        }
    }

    pub fn subheading(&self) -> String {
        format!("{} tracks curated for your mood", self.tracks().len())
    }

    pub fn next(&mut self) {
        let len = self.tracks().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn prev(&mut self) {
        if self.tracks().is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }
}

impl Default for PlaylistView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PlaylistView {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Ok(true)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.prev();
                Ok(true)
            }
            KeyCode::Enter | KeyCode::Char('p') => {
                if let (Some(idx), Some(tx)) = (self.state.selected(), self.action_tx.as_ref()) {
                    if idx < self.tracks().len() {
                        tx.send(Action::PlayTrack(idx))?;
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        match action {
            Action::WeatherLoaded(reading) => self.set_condition(&reading.condition),
            Action::PlayTrack(idx) => {
                if let Some(track) = self.tracks().get(*idx) {
                    tracing::debug!(id = track.id, title = track.title, "play pressed");
                    self.playing = Some(*idx);
                    self.play_seq = self.play_seq.wrapping_add(1);
                }
            }
            Action::ClearPlaying(seq) => {
                if *seq == self.play_seq {
                    self.playing = None;
                }
            }
            _ => {}
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.heading()),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.subheading()),
                Style::default().fg(theme.text_dim),
            )),
            rows[1],
        );

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_selected = selected == Some(i);
                let play = if self.playing == Some(i) { "♪ ▶" } else { "▶" };
                let play_style = if self.playing == Some(i) {
                    Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.primary)
                };

                let title_line = Line::from(vec![
                    Span::styled(
                        format!(" {} ", i + 1),
                        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        track.title,
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}  ", track.duration), Style::default().fg(theme.text_dim)),
                    Span::styled(play, play_style),
                ]);
                let artist_line = Line::from(vec![
                    Span::raw("   "),
                    Span::styled(track.artist, Style::default().fg(theme.text_dim)),
                ]);

                let mut item = ListItem::new(vec![title_line, artist_line, Line::from("")]);
                if is_selected {
                    item = item.style(Style::default().bg(theme.selection_bg));
                }
                item
            })
            .collect();

        let list = List::new(items).highlight_symbol("▌");
        frame.render_stateful_widget(list, rows[2], &mut self.state.clone());
    }
}
