use crate::ui::app::App;
use crate::ui::nav::{NavIntent, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.nav().is_editing() {
        match key.code {
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Esc => {
                app.dispatch_nav(NavIntent::CancelEdit);
            }
            KeyCode::Backspace => {
                app.dispatch_nav(NavIntent::Backspace);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_nav(NavIntent::Type(ch));
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.dispatch_nav(NavIntent::SwitchPane);
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(true),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(false),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('a') if app.nav().focus == Pane::Stock => app.activate_selected(),
        KeyCode::Char('e') if app.nav().focus == Pane::Cart => app.activate_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
