use crate::ui::app::App;
use crate::ui::quiz::Status;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match app.status() {
        Status::Ready => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.submit_selected();
            }
            KeyCode::Char(ch) => {
                if let Some(digit) = ch.to_digit(10) {
                    if digit > 0 {
                        app.submit_index(digit as usize - 1);
                    }
                }
            }
            _ => {}
        },
        Status::Answered => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                app.next_question();
            }
        }
        Status::Error => {
            if matches!(key.code, KeyCode::Char('r')) {
                app.reload();
            }
        }
        Status::Idle | Status::Fetching => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
