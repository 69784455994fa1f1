//! Key mapping from terminal events to steering commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forward to the direction gate
    Steer(Direction),
    /// Throw the finished session away and start a fresh one
    Restart,
}

/// DOM `keyCode` values for the arrow keys.
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_UP: u32 = 38;
pub const KEY_CODE_RIGHT: u32 = 39;
pub const KEY_CODE_DOWN: u32 = 40;

/// Map a raw arrow-key code (37..=40) to a direction; anything else is ignored.
pub fn direction_from_key_code(code: u32) -> Option<Direction> {
    match code {
        KEY_CODE_LEFT => Some(Direction::Left),
        KEY_CODE_UP => Some(Direction::Up),
        KEY_CODE_RIGHT => Some(Direction::Right),
        KEY_CODE_DOWN => Some(Direction::Down),
        _ => None,
    }
}

/// Map a terminal key to a direction.
///
/// Arrow keys, plus WASD and HJKL as aliases.
pub fn direction_from_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if let Some(direction) = direction_from_key(key.code) {
        return Some(InputCommand::Steer(direction));
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
