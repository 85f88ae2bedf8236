//! Minimap projection: a top-down window of the grid centred on the player.
//!
//! This module is pure (no I/O). Each map cell is two characters wide to
//! compensate for typical terminal glyph aspect ratio; the second column is
//! always blank.

use crate::core::{OccupancyGrid, Player};
use crate::fb::CharBuffer;
use crate::types::{glyph, SIGHT_LINE_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapProjector {
    /// Side length in map cells; odd so there is a centre cell.
    size: u16,
}

impl MinimapProjector {
    pub fn new(size: u16) -> Self {
        debug_assert!(size % 2 == 1, "minimap size must be odd");
        Self { size }
    }

    fn half(&self) -> i64 {
        (self.size / 2) as i64
    }

    /// Buffer position of window offset `(mx, mz)`, if it fits.
    ///
    /// Every row has the same length, so checking against the buffer width
    /// covers all rows.
    fn slot(fb: &CharBuffer, mx: i64, mz: i64) -> Option<(u16, u16)> {
        if mx < 0 || mz < 0 || mx * 2 + 1 >= fb.width() as i64 || mz >= fb.height() as i64 {
            return None;
        }
        Some(((mx * 2) as u16, mz as u16))
    }

    /// Render a `size` x `2 * size` character minimap.
    pub fn render(&self, grid: &OccupancyGrid, player: &Player) -> CharBuffer {
        let mut fb = CharBuffer::new(self.size.saturating_mul(2), self.size);
        let (cx, cz) = player.cell();
        let half = self.half();

        for dz in -half..=half {
            for dx in -half..=half {
                let Some((col, row)) = Self::slot(&fb, dx + half, dz + half) else {
                    continue;
                };
                let ch = match grid.cell(cx + dx, cz + dz) {
                    None => glyph::BLANK,
                    Some(true) => glyph::MAP_WALL,
                    Some(false) => glyph::MAP_FLOOR,
                };
                fb.set(col, row, ch);
                fb.set(col + 1, row, glyph::BLANK);
            }
        }

        if let Some((col, row)) = Self::slot(&fb, half, half) {
            fb.set(col, row, glyph::PLAYER);
        }

        self.draw_sight_line(&mut fb, grid, player);
        fb
    }

    /// March whole-cell steps along the facing direction, marking each free
    /// cell until a wall or the buffer edge.
    fn draw_sight_line(&self, fb: &mut CharBuffer, grid: &OccupancyGrid, player: &Player) {
        let (dir_x, dir_z) = player.direction();
        let (cx, cz) = player.cell();
        let half = self.half();

        for step in 1..=SIGHT_LINE_STEPS {
            let fx = player.x + dir_x * step as f32;
            let fz = player.z + dir_z * step as f32;
            if grid.is_blocked(fx, fz) {
                break;
            }

            // Offsets truncate toward zero, matching the player cell.
            let dx = (fx - cx as f32) as i64;
            let dz = (fz - cz as f32) as i64;
            let Some((col, row)) = Self::slot(fb, dx + half, dz + half) else {
                break;
            };
            if fb.get(col, row) == Some(glyph::PLAYER) {
                continue;
            }
            fb.set(col, row, glyph::SIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_double_width() {
        let grid = OccupancyGrid::bordered(32, 32);
        let p = Player::new(16.5, 16.5, 0.0);
        let fb = MinimapProjector::new(9).render(&grid, &p);
        assert_eq!(fb.width(), 18);
        assert_eq!(fb.height(), 9);
        for y in 0..fb.height() {
            for x in (1..fb.width()).step_by(2) {
                assert_eq!(fb.get(x, y), Some(' '));
            }
        }
    }

    #[test]
    fn centre_is_player_even_inside_wall() {
        let grid = OccupancyGrid::new(4, 4);
        let mut walled = OccupancyGrid::bordered(4, 4);
        walled.set_blocked(1, 1, true);
        for g in [grid, walled] {
            let p = Player::new(1.5, 1.5, 0.0);
            let fb = MinimapProjector::new(9).render(&g, &p);
            assert_eq!(fb.get(8, 4), Some('P'));
        }
    }

    #[test]
    fn outside_grid_is_blank() {
        let grid = OccupancyGrid::bordered(10, 10);
        // Player cell (1, 1): window reaches 3 cells past the top-left edge.
        let p = Player::new(1.5, 1.5, 0.0);
        let fb = MinimapProjector::new(9).render(&grid, &p);
        assert_eq!(fb.row_string(0), " ".repeat(18));
        assert_eq!(fb.get(4, 4), Some(' '));
        assert_eq!(fb.get(6, 4), Some('#'));
        assert_eq!(fb.get(8, 3), Some('#'));
    }

    #[test]
    fn sight_line_marks_cells_ahead() {
        let grid = OccupancyGrid::bordered(32, 32);
        let p = Player::new(10.5, 16.5, 0.0);
        let fb = MinimapProjector::new(21).render(&grid, &p);
        // Centre at column 20, row 10. Eight steps east.
        for step in 1..=8u16 {
            assert_eq!(fb.get(20 + step * 2, 10), Some('*'), "step {step}");
        }
        assert_eq!(fb.get(20 + 9 * 2, 10), Some('.'));
        assert_eq!(fb.count('*'), 8);
    }

    #[test]
    fn sight_line_stops_before_wall() {
        let mut grid = OccupancyGrid::bordered(32, 32);
        for z in 0..32 {
            grid.set_blocked(14, z, true);
        }
        let p = Player::new(10.5, 16.5, 0.0);
        let fb = MinimapProjector::new(21).render(&grid, &p);
        // Cells 11, 12, 13 are free; 14 is the wall.
        assert_eq!(fb.count('*'), 3);
    }

    #[test]
    fn facing_adjacent_wall_draws_no_sight() {
        let grid = OccupancyGrid::bordered(16, 16);
        let p = Player::new(1.5, 8.5, std::f32::consts::PI);
        let fb = MinimapProjector::new(9).render(&grid, &p);
        assert_eq!(fb.count('*'), 0);
        assert_eq!(fb.get(8, 4), Some('P'));
    }

    #[test]
    fn sight_line_stays_inside_small_window() {
        let grid = OccupancyGrid::bordered(64, 64);
        let p = Player::new(32.5, 32.5, 0.0);
        let fb = MinimapProjector::new(9).render(&grid, &p);
        // Half-width 4: only four steps fit before the buffer edge.
        assert_eq!(fb.count('*'), 4);
        assert_eq!(fb.width(), 18);
    }
}
