//! The built-in world layout.
//!
//! A 64x64 maze of long corridors: an outer wall ring, horizontal walls with
//! single-cell doorways, a row of posts and several vertical walls.

use crate::grid::OccupancyGrid;
use crate::types::{MAP_HEIGHT, MAP_WIDTH};

/// Spawn position (x, z) for a new session.
pub const SPAWN: (f32, f32) = (14.0, 14.0);

/// Spawn yaw in degrees (facing +z).
pub const SPAWN_YAW_DEG: f32 = 90.0;

/// Doorways cut through the walls after they are laid out, as (x, z).
const DOORWAYS: [(usize, usize); 6] = [(5, 3), (10, 6), (15, 9), (20, 15), (42, 18), (30, 22)];

/// Build the default world.
pub fn default_world() -> OccupancyGrid {
    let mut grid = OccupancyGrid::bordered(MAP_WIDTH, MAP_HEIGHT);

    // Horizontal walls: (z, x range, stride).
    let rows: [(usize, std::ops::Range<usize>, usize); 7] = [
        (3, 2..60, 1),
        (6, 4..62, 1),
        (9, 1..58, 1),
        (12, 5..60, 4),
        (15, 15..25, 1),
        (18, 40..55, 1),
        (22, 25..35, 1),
    ];
    for (z, xs, stride) in rows {
        for x in xs.step_by(stride) {
            grid.set_blocked(x, z, true);
        }
    }

    // Vertical walls: (x, z range).
    let cols: [(usize, std::ops::Range<usize>); 4] =
        [(10, 4..30), (20, 2..25), (35, 6..28), (50, 1..20)];
    for (x, zs) in cols {
        for z in zs {
            grid.set_blocked(x, z, true);
        }
    }

    for (x, z) in DOORWAYS {
        grid.set_blocked(x, z, false);
    }

    grid
}
