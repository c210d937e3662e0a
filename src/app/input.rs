// Key event handling: maps key presses to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::components::Component;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::{Char, Esc};

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == Char('c') {
            self.action_tx.send(Action::Quit)?;
            return Ok(());
        }

        // The help overlay consumes all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }

        match key.code {
            Char('q') | Esc => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('r') => {
                // Mirrors a disabled refresh button while loading
                if !self.loading {
                    self.action_tx.send(Action::Refresh)?;
                }
            }
            Char('t') => self.action_tx.send(Action::ToggleTheme)?,
            _ => {
                if !self.loading {
                    self.playlist_view.handle_key_event(key)?;
                }
            }
        }
        Ok(())
    }
}
