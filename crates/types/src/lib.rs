//! Core types module - shared constants and small value types
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the pure world logic, the projectors and the terminal session.
//!
//! # World Dimensions
//!
//! - **Width**: 64 cells (x, indexed 0-63)
//! - **Height**: 64 cells (z, indexed 0-63)
//!
//! # Ray Marching Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.1 | Distance advanced per march step (grid units) |
//! | `MAX_RAY_DISTANCE` | 64.0 | Exploration limit (larger map dimension) |
//! | `PROJECTION_EPSILON` | 0.01 | Added to distances before dividing |
//!
//! # Shading
//!
//! Corrected distances map onto a fixed six-bucket table, nearest first:
//!
//! | Distance | Glyph |
//! |----------|-------|
//! | < 1.0 | `#` |
//! | < 2.0 | `@` |
//! | < 3.0 | `O` |
//! | < 4.0 | `+` |
//! | < 6.0 | `:` |
//! | < 8.0 | `.` |
//! | >= 8.0 | blank |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{PlayerAction, MAP_HEIGHT, MAP_WIDTH};
//!
//! assert_eq!(PlayerAction::TurnLeft.as_str(), "turn_left");
//!
//! assert_eq!(MAP_WIDTH, 64);
//! assert_eq!(MAP_HEIGHT, 64);
//! ```

/// World width in cells (64 columns)
pub const MAP_WIDTH: usize = 64;

/// World height in cells (64 rows)
pub const MAP_HEIGHT: usize = 64;

/// Ray march step size in grid units
pub const RAY_STEP: f32 = 0.1;

/// Maximum ray travel distance (the larger map dimension)
pub const MAX_RAY_DISTANCE: f32 = 64.0;

/// Added to corrected distances before projecting wall heights
pub const PROJECTION_EPSILON: f32 = 0.01;

/// Number of integer steps the minimap sight-line may take
pub const SIGHT_LINE_STEPS: u32 = 8;

/// Smallest minimap side length (cells)
pub const MIN_MINIMAP_SIZE: u16 = 9;

/// Rows reserved below the view: two status lines plus the cursor row
pub const STATUS_ROWS: u16 = 3;

/// Default horizontal field of view in degrees
pub const DEFAULT_FOV_DEG: f32 = 60.0;

/// Default distance moved per forward/backward action
pub const DEFAULT_MOVE_SPEED: f32 = 0.2;

/// Default yaw change per turn action in degrees
pub const DEFAULT_TURN_DEG: f32 = 5.0;

/// Default frame interval in milliseconds (~30 FPS)
pub const FRAME_MS: u64 = 33;

/// Glyphs used by the projectors.
///
/// Every buffer the renderer produces is drawn from this set only.
pub mod glyph {
    /// Sky rows above a wall band, and far walls.
    pub const BLANK: char = ' ';
    /// Floor rows below a wall band.
    pub const FLOOR: char = '-';
    /// Minimap wall cell.
    pub const MAP_WALL: char = '#';
    /// Minimap free cell.
    pub const MAP_FLOOR: char = '.';
    /// Minimap player marker.
    pub const PLAYER: char = 'P';
    /// Minimap line-of-sight marker.
    pub const SIGHT: char = '*';
}

/// Shading table: upper distance bound (exclusive) and the wall glyph used
/// below it. Ordered nearest to farthest, densest to lightest.
pub const SHADE_TABLE: [(f32, char); 6] = [
    (1.0, '#'),
    (2.0, '@'),
    (3.0, 'O'),
    (4.0, '+'),
    (6.0, ':'),
    (8.0, '.'),
];

/// Player actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Quit,
}

impl PlayerAction {
    /// Stable lowercase name, used in log events
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::MoveForward.as_str(), "move_forward");
    /// assert_eq!(PlayerAction::Quit.as_str(), "quit");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveForward => "move_forward",
            PlayerAction::MoveBackward => "move_backward",
            PlayerAction::TurnLeft => "turn_left",
            PlayerAction::TurnRight => "turn_right",
            PlayerAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_table_is_sorted_by_distance() {
        for pair in SHADE_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert_eq!(SHADE_TABLE[0], (1.0, '#'));
        assert_eq!(SHADE_TABLE[5], (8.0, '.'));
    }

    #[test]
    fn max_distance_covers_larger_map_dimension() {
        assert_eq!(MAX_RAY_DISTANCE, MAP_WIDTH.max(MAP_HEIGHT) as f32);
    }

    #[test]
    fn action_names_are_lowercase_and_distinct() {
        let names: Vec<&str> = [
            PlayerAction::MoveForward,
            PlayerAction::MoveBackward,
            PlayerAction::TurnLeft,
            PlayerAction::TurnRight,
            PlayerAction::Quit,
        ]
        .iter()
        .map(PlayerAction::as_str)
        .collect();

        for (i, name) in names.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase());
            assert!(!names[i + 1..].contains(name), "duplicate name {name}");
        }
        assert_eq!(names[1], "move_backward");
    }
}
