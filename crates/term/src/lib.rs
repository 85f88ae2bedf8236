//! Terminal rendering layer for the raycaster.
//!
//! Everything except [`renderer`] is pure: the projectors turn a grid, a
//! player and a viewport into plain character buffers, and the renderer
//! flushes those buffers to a terminal backend.
//!
//! Goals:
//! - Keep rendering deterministic and testable
//! - Keep terminal I/O behind small capabilities ([`DisplaySink`], [`ViewportSource`])
//! - Double-width minimap cells to compensate for glyph aspect ratio

pub mod fb;
pub mod frame;
pub mod minimap;
pub mod perspective;
pub mod renderer;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::CharBuffer;
pub use frame::{FrameComposer, RenderedFrame, Viewport};
pub use minimap::MinimapProjector;
pub use perspective::{
    correct_fisheye, ray_angle, shade_for_distance, wall_band, PerspectiveProjector,
};
pub use renderer::{
    encode_buffer_into, encode_clear_home_into, encode_line_into, DisplaySink, TerminalRenderer,
    TerminalSize, ViewportSource, FALLBACK_VIEWPORT,
};
