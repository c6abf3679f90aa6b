use crate::game::GameState;
use crate::session::{GameSession, SessionEvent};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Presentation-side wrapper around the session: cursor and quit flag.
pub struct App {
    should_quit: bool,
    session: GameSession,
    cursor: usize,
    columns: usize,
}

impl App {
    pub fn new(session: GameSession, columns: usize) -> Self {
        Self {
            should_quit: false,
            session,
            cursor: 0,
            columns: columns.max(1),
        }
    }

    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn move_cursor(&mut self, direction: Move) {
        let len = self.state().deck.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        let columns = self.columns;
        let current = self.cursor.min(len - 1);
        self.cursor = match direction {
            Move::Left if current % columns > 0 => current - 1,
            Move::Right if current % columns + 1 < columns && current + 1 < len => current + 1,
            Move::Up if current >= columns => current - columns,
            Move::Down if current + columns < len => current + columns,
            _ => current,
        };
    }

    /// Flip the card under the cursor. Face-up cards and locked boards are
    /// left alone.
    pub fn select_at_cursor(&mut self) -> bool {
        self.session.select_card(self.cursor)
    }

    pub fn new_game(&mut self) {
        self.session.start_new_game();
        self.clamp_cursor();
    }

    pub fn retry(&mut self) {
        self.session.retry_load();
        self.clamp_cursor();
    }

    pub fn on_session_event(&mut self, event: SessionEvent) {
        self.session.handle_event(event);
        self.clamp_cursor();
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    fn clamp_cursor(&mut self) {
        let len = self.state().deck.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
