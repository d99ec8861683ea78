//! Keyboard handling for the TUI.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

fn handle_shortcut(shortcut: Shortcut, app: &mut App, now: Instant) -> HandleResult {
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::Format(kind) => {
            app.apply_format(kind);
        }
        Shortcut::Example(index) => {
            app.load_example(index);
        }
        Shortcut::Copy => {
            app.copy(now);
        }
        Shortcut::Clear => app.clear(),
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App, now: Instant) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Esc+key sequence (Option as Meta on Mac terminals)
    if app.escape_pending {
        app.escape_pending = false;
        if let Some(shortcut) = Shortcut::match_key(&key, true) {
            return handle_shortcut(shortcut, app, now);
        }
    }

    if let Some(shortcut) = Shortcut::match_key(&key, false) {
        return handle_shortcut(shortcut, app, now);
    }

    if Shortcut::is_escape(&key) {
        app.escape_pending = true;
        return HandleResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => app.session.insert_newline(),
        (KeyCode::Backspace, _) => {
            app.session.backspace();
        }
        (KeyCode::Up, _) => app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char(c), mods) => {
            // Unbound Ctrl/Alt combos are not text
            if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                app.session.insert_char(c);
            }
        }
        _ => {}
    }
    HandleResult::Continue
}
