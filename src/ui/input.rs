use crate::ui::app::{App, Move};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Move::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Move::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Move::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Move::Down),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_at_cursor();
        }
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_game(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
