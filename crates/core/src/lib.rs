//! Core world logic - pure, deterministic, and testable
//!
//! This crate holds the world model and the geometric queries the renderer
//! is built on. It has **zero dependencies** on terminals or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: W x H occupancy grid with the out-of-bounds-is-blocked collision query
//! - [`world`]: the built-in 64x64 world layout and spawn point
//! - [`ray`]: fixed-step ray marcher
//! - [`player`]: player state and collision-checked movement
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{OccupancyGrid, RayMarcher};
//!
//! let grid = OccupancyGrid::bordered(64, 64);
//! let marcher = RayMarcher::default();
//!
//! // Straight along +x from the middle hits the east wall about 31 cells away.
//! let d = marcher.cast(&grid, 32.0, 32.0, 0.0);
//! assert!((d - 31.0).abs() <= 0.11);
//! ```

pub mod grid;
pub mod player;
pub mod ray;
pub mod world;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use grid::OccupancyGrid;
pub use player::{Motion, Moved, Player};
pub use ray::RayMarcher;
pub use world::{default_world, SPAWN, SPAWN_YAW_DEG};
