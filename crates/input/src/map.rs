//! Key mapping from characters to player actions.

use crate::types::PlayerAction;

/// The character a raw-mode terminal produces for Ctrl-C.
pub const CTRL_C: char = '\u{3}';

/// Map a pressed key to a player action.
pub fn action_for_key(key: char) -> Option<PlayerAction> {
    match key {
        'w' | 'W' => Some(PlayerAction::MoveForward),
        's' | 'S' => Some(PlayerAction::MoveBackward),
        'a' | 'A' => Some(PlayerAction::TurnLeft),
        'd' | 'D' => Some(PlayerAction::TurnRight),
        'q' | 'Q' | CTRL_C => Some(PlayerAction::Quit),
        _ => None,
    }
}
