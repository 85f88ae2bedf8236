//! Non-blocking key sources.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::map::CTRL_C;

/// Reports the next pending keypress without blocking.
pub trait KeySource {
    /// `Ok(None)` when no key is waiting.
    fn poll_key(&mut self) -> Result<Option<char>>;
}

/// Key source backed by crossterm's event queue.
///
/// Expects the terminal to already be in raw mode.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<char>> {
        // Drain non-key events (resize, focus) so they never block a key.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(ch) = key_char(key) {
                    return Ok(Some(ch));
                }
            }
        }
        Ok(None)
    }
}

/// Translate a key event into the character the action map understands.
///
/// Arrow keys become their WASD equivalents; releases are ignored.
pub fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(CTRL_C)
        }
        KeyCode::Char(ch) => Some(ch),
        KeyCode::Up => Some('w'),
        KeyCode::Down => Some('s'),
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('d'),
        _ => None,
    }
}
