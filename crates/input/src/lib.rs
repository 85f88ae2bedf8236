//! Terminal input module.
//!
//! Keys arrive as single characters from a non-blocking [`KeySource`] and are
//! mapped to [`crate::types::PlayerAction`]s by [`action_for_key`].

pub mod map;
pub mod source;

pub use tui_raycaster_types as types;

pub use map::{action_for_key, CTRL_C};
pub use source::{key_char, KeySource, TerminalKeys};
