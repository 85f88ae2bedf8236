//! Ray marching against the occupancy grid.
//!
//! A ray advances from its origin in fixed steps until the collision query
//! reports a blocked cell or the exploration limit is passed. Precision is
//! bounded by the step size.

use crate::grid::OccupancyGrid;
use crate::types::{MAX_RAY_DISTANCE, RAY_STEP};

/// Fixed-step ray marcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayMarcher {
    step: f32,
    max_distance: f32,
}

impl Default for RayMarcher {
    fn default() -> Self {
        Self {
            step: RAY_STEP,
            max_distance: MAX_RAY_DISTANCE,
        }
    }
}

impl RayMarcher {
    /// Create a marcher. `step` must be positive.
    pub fn new(step: f32, max_distance: f32) -> Self {
        debug_assert!(step > 0.0, "ray step must be positive");
        Self {
            step,
            max_distance: max_distance.max(0.0),
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Distance travelled along `angle` from `(x, z)` before hitting a wall.
    ///
    /// The result is in `[0, max_distance + step]`. An origin inside a wall
    /// yields 0.
    pub fn cast(&self, grid: &OccupancyGrid, x: f32, z: f32, angle: f32) -> f32 {
        self.cast_limited(grid, x, z, angle, usize::MAX)
    }

    /// Like [`cast`](Self::cast), but takes at most `max_steps` steps.
    ///
    /// Growing `max_steps` never shrinks the result.
    pub fn cast_limited(
        &self,
        grid: &OccupancyGrid,
        x: f32,
        z: f32,
        angle: f32,
        max_steps: usize,
    ) -> f32 {
        let (dz, dx) = angle.sin_cos();
        let mut steps = 0usize;
        let mut dist = 0.0f32;

        // Distance is derived from the step count so it never accumulates
        // rounding drift.
        while steps < max_steps
            && dist < self.max_distance
            && !grid.is_blocked(x + dx * dist, z + dz * dist)
        {
            steps += 1;
            dist = steps as f32 * self.step;
        }

        dist
    }
}
