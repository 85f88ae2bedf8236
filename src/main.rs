//! Terminal raycaster runner (default binary).
//!
//! Walk the built-in maze with WASD or the arrow keys; Q quits.
//! Configuration comes from `RAYCAST_*` environment variables.

use anyhow::Result;

use tui_raycaster::input::TerminalKeys;
use tui_raycaster::session::{init_logging, Session, SessionConfig};
use tui_raycaster::term::{TerminalRenderer, TerminalSize};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    session.run(&mut TerminalKeys, term, &mut TerminalSize)
}
