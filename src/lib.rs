//! TUI raycaster (workspace facade crate).
//!
//! Exposes `tui_raycaster::{core,input,session,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_session as session;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
