//! Player state and movement validation.
//!
//! The player is mutated only between frames, by [`Player::apply_action`].
//! Renders read it without modification.

use crate::grid::OccupancyGrid;
use crate::types::{PlayerAction, DEFAULT_FOV_DEG, DEFAULT_MOVE_SPEED, DEFAULT_TURN_DEG};

/// Movement tuning applied by [`Player::apply_action`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Distance per forward/backward action.
    pub move_speed: f32,
    /// Yaw change per turn action, in radians.
    pub turn_speed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_DEG.to_radians(),
        }
    }
}

/// Result of applying a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    /// Position or yaw changed.
    Yes,
    /// The proposed position was blocked; nothing changed.
    Blocked,
    /// The action does not affect the player (e.g. quit).
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub z: f32,
    /// Facing direction in radians; 0 looks along +x, pi/2 along +z.
    pub yaw: f32,
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Rays cast per frame; kept equal to the viewport width.
    pub ray_count: u16,
}

impl Player {
    pub fn new(x: f32, z: f32, yaw: f32) -> Self {
        Self {
            x,
            z,
            yaw,
            fov: DEFAULT_FOV_DEG.to_radians(),
            ray_count: 80,
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Unit facing vector (dx, dz).
    pub fn direction(&self) -> (f32, f32) {
        let (s, c) = self.yaw.sin_cos();
        (c, s)
    }

    /// Integer cell containing the player (truncated).
    pub fn cell(&self) -> (i64, i64) {
        (self.x as i64, self.z as i64)
    }

    /// Yaw in degrees, for display.
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }

    /// Move to `(x, z)` only if the collision query allows it.
    pub fn try_move_to(&mut self, grid: &OccupancyGrid, x: f32, z: f32) -> bool {
        if grid.is_blocked(x, z) {
            return false;
        }
        self.x = x;
        self.z = z;
        true
    }

    /// Apply one input action.
    pub fn apply_action(
        &mut self,
        action: PlayerAction,
        grid: &OccupancyGrid,
        motion: Motion,
    ) -> Moved {
        let (dx, dz) = self.direction();
        let step = motion.move_speed;
        let moved = match action {
            PlayerAction::MoveForward => {
                self.try_move_to(grid, self.x + dx * step, self.z + dz * step)
            }
            PlayerAction::MoveBackward => {
                self.try_move_to(grid, self.x - dx * step, self.z - dz * step)
            }
            PlayerAction::TurnLeft => {
                self.yaw -= motion.turn_speed;
                true
            }
            PlayerAction::TurnRight => {
                self.yaw += motion.turn_speed;
                true
            }
            PlayerAction::Quit => return Moved::Ignored,
        };
        if moved {
            Moved::Yes
        } else {
            Moved::Blocked
        }
    }
}
