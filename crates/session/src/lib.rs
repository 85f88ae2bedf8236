//! Session layer: configuration, logging and the frame loop.
//!
//! The loop is generic over the input, display and viewport capabilities so
//! it can be driven by the real terminal or by in-memory fakes.

pub mod config;
pub mod logging;
pub mod session;
pub mod status;

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

pub use config::SessionConfig;
pub use logging::init_logging;
pub use session::{Session, Step};
pub use status::{position_line, status_lines, HELP_LINE};
