//! Key mapping from terminal events to game actions.
//!
//! Terminal keys are first normalized into the same identifiers the core key
//! table understands (`"arrowup"`, `"w"`, ...), then looked up there.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Normalized identifier for a terminal key.
///
/// Character keys are lowercased. Returns `None` for keys that have no
/// identifier in the game's vocabulary.
pub fn key_identifier(code: KeyCode, buf: &mut [u8; 4]) -> Option<&str> {
    match code {
        KeyCode::Up => Some("arrowup"),
        KeyCode::Down => Some("arrowdown"),
        KeyCode::Left => Some("arrowleft"),
        KeyCode::Right => Some("arrowright"),
        KeyCode::Char(c) => Some(c.to_ascii_lowercase().encode_utf8(buf)),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let mut buf = [0u8; 4];
    key_identifier(key.code, &mut buf).and_then(GameAction::from_key)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
