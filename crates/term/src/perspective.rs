//! Perspective projection: per-column ray distances into a first-person view.
//!
//! This module is pure (no I/O). Each output column casts one ray, corrects
//! the hit distance for fisheye distortion, and fills the column with sky,
//! a shaded wall band centred vertically, and floor.

use crate::core::{OccupancyGrid, Player, RayMarcher};
use crate::fb::CharBuffer;
use crate::types::{glyph, PROJECTION_EPSILON, SHADE_TABLE};

/// Wall glyph for a corrected distance. Nearer walls get denser glyphs;
/// anything at 8 or beyond is blank.
pub fn shade_for_distance(distance: f32) -> char {
    SHADE_TABLE
        .iter()
        .find(|(limit, _)| distance < *limit)
        .map_or(glyph::BLANK, |&(_, ch)| ch)
}

/// Angle of ray `column` out of `ray_count`, spread evenly across the FOV
/// from the leftmost (`column = 0`) edge.
pub fn ray_angle(player: &Player, column: u16, ray_count: u16) -> f32 {
    player.yaw - player.fov / 2.0 + (column as f32 / ray_count as f32) * player.fov
}

/// Scale a raw hit distance by the cosine of the ray's offset from `yaw`.
pub fn correct_fisheye(raw: f32, angle: f32, yaw: f32) -> f32 {
    raw * (angle - yaw).cos()
}

/// Vertical extent of a wall band as `(ceiling_rows, floor_row_start)`.
///
/// Rows `[ceiling_rows, floor_row_start)` are wall. Values may fall outside
/// `0..view_height` for very near walls; callers bound them by the row loop.
pub fn wall_band(view_height: i32, corrected: f32) -> (i32, i32) {
    let wall_height = (view_height as f32 / (corrected + PROJECTION_EPSILON)) as i32;
    let ceiling = view_height.saturating_sub(wall_height) / 2;
    let floor = view_height.saturating_sub(ceiling);
    (ceiling, floor)
}

/// First-person view projector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerspectiveProjector {
    marcher: RayMarcher,
}

impl PerspectiveProjector {
    /// Render a `width` x `view_height` view, one ray per column.
    ///
    /// A non-positive `view_height` yields an empty (zero-row) buffer.
    pub fn render(
        &self,
        grid: &OccupancyGrid,
        player: &Player,
        width: u16,
        view_height: i32,
    ) -> CharBuffer {
        let rows = view_height.clamp(0, u16::MAX as i32) as u16;
        let mut fb = CharBuffer::new(width, rows);
        if rows == 0 {
            return fb;
        }

        for column in 0..width {
            let angle = ray_angle(player, column, width);
            let raw = self.marcher.cast(grid, player.x, player.z, angle);
            let corrected = correct_fisheye(raw, angle, player.yaw);
            let (ceiling, floor) = wall_band(view_height, corrected);
            let shade = shade_for_distance(corrected);

            for y in 0..rows {
                let row = y as i32;
                let ch = if row < ceiling {
                    glyph::BLANK
                } else if row < floor {
                    shade
                } else {
                    glyph::FLOOR
                };
                fb.set(column, y, ch);
            }
        }

        fb
    }
}
