//! Key mapping from terminal events to spin actions.

use crate::types::SpinAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to spin actions.
pub fn action_for_key(key: KeyEvent) -> Option<SpinAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // The spin button
        KeyCode::Char(' ') | KeyCode::Enter => Some(SpinAction::Toggle),

        KeyCode::Char('s') | KeyCode::Char('S') => Some(SpinAction::Spin),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => Some(SpinAction::Stop),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
