//! Keyboard and pointer routing for App.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::App;
use crate::deck::DeckCommand;
use crate::gesture::{PointerPhase, PointerSample};

impl App {
    /// Handle a key press. Returns true if the key was bound.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let effects = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return true;
            }
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.deck.command(DeckCommand::Pass, now),
            KeyCode::Right | KeyCode::Char('l') => self.deck.command(DeckCommand::Save, now),
            KeyCode::Char('r') => self.deck.force_refill(),
            KeyCode::Esc => {
                self.deck.cancel_gesture();
                Vec::new()
            }
            _ => return false,
        };

        self.execute(effects);
        self.mark_dirty();
        true
    }

    /// Handle a terminal mouse event.
    ///
    /// A press only starts a drag when it lands on the front card.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        let Some(sample) = PointerSample::from_mouse(&event, self.config.cell_scale) else {
            return;
        };
        if sample.phase == PointerPhase::Begin && !self.hits_card(event.column, event.row) {
            return;
        }
        self.handle_pointer(sample, now);
    }

    /// Feed an already-normalized pointer sample (mouse or touch).
    pub fn handle_pointer(&mut self, sample: PointerSample, now: Instant) {
        let effects = self.deck.pointer(&sample, now);
        self.execute(effects);
        self.mark_dirty();
    }

    fn hits_card(&self, column: u16, row: u16) -> bool {
        match self.card_area {
            Some(area) => {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            }
            // Nothing rendered yet: accept the press.
            None => true,
        }
    }
}
