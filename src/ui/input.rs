use crate::model::CardRecord;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<R: CardRecord>(app: &mut App<R>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Card => handle_card_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_card_key<R: CardRecord>(app: &mut App<R>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => app.next_card(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => app.prev_card(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_answer(),
        KeyCode::Char('s') => app.speak_current(),
        KeyCode::Tab | KeyCode::Char('a') => app.focus_form(),
        _ => {}
    }
}

fn handle_form_key<R: CardRecord>(app: &mut App<R>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus_card(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut buffer = [0u8; 4];
            app.form_insert(ch.encode_utf8(&mut buffer));
        }
        _ => {}
    }
}

/// Pasted text goes to the focused form field; ignored while on the card.
pub fn handle_paste<R: CardRecord>(app: &mut App<R>, text: &str) {
    if app.focus() == Focus::Form {
        app.form_insert(text);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
