//! Frame composition: sizes the two views from the viewport and renders them.
//!
//! This module is pure (no I/O). Buffers are rebuilt from scratch every
//! frame; nothing is carried between frames.

use crate::core::{OccupancyGrid, Player};
use crate::fb::CharBuffer;
use crate::minimap::MinimapProjector;
use crate::perspective::PerspectiveProjector;
use crate::types::{MIN_MINIMAP_SIZE, STATUS_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Minimap side length: `min(width / 2, height / 3)`, at least 9, odd.
    pub fn minimap_size(&self) -> u16 {
        let mut size = (self.width / 2).min(self.height / 3).max(MIN_MINIMAP_SIZE);
        if size % 2 == 0 {
            size += 1;
        }
        size
    }

    /// Rows left for the first-person view. Negative when the viewport is
    /// too small to fit the minimap and status lines.
    pub fn view_height(&self) -> i32 {
        self.height as i32 - self.minimap_size() as i32 - STATUS_ROWS as i32
    }
}

/// The two character buffers produced for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// First-person view, `view_height` x `width`.
    pub view: CharBuffer,
    /// Top-down map, `size` x `2 * size`.
    pub minimap: CharBuffer,
}

impl RenderedFrame {
    /// Combined hash of both buffers.
    pub fn fingerprint(&self) -> u64 {
        self.view.fingerprint().rotate_left(1) ^ self.minimap.fingerprint()
    }
}

/// Renders complete frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameComposer {
    perspective: PerspectiveProjector,
}

impl FrameComposer {
    /// Render one frame. One ray is cast per viewport column;
    /// `player.ray_count` is not consulted.
    pub fn compose(
        &self,
        grid: &OccupancyGrid,
        player: &Player,
        viewport: Viewport,
    ) -> RenderedFrame {
        let minimap_size = viewport.minimap_size();
        let view_height = viewport.view_height();

        tracing::trace!(
            width = viewport.width,
            height = viewport.height,
            minimap_size,
            view_height,
            "compose frame"
        );

        RenderedFrame {
            view: self.perspective.render(grid, player, viewport.width, view_height),
            minimap: MinimapProjector::new(minimap_size).render(grid, player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimap_size_formula() {
        assert_eq!(Viewport::new(120, 40).minimap_size(), 13);
        assert_eq!(Viewport::new(10, 10).minimap_size(), 9);
        // min(50, 14) = 14 is even => 15.
        assert_eq!(Viewport::new(100, 42).minimap_size(), 15);
        // Clamped 9 is already odd.
        assert_eq!(Viewport::new(0, 0).minimap_size(), 9);
    }

    #[test]
    fn minimap_size_is_always_odd_and_at_least_nine() {
        for w in (0..300).step_by(7) {
            for h in (0..120).step_by(5) {
                let s = Viewport::new(w, h).minimap_size();
                assert!(s >= 9);
                assert_eq!(s % 2, 1);
            }
        }
    }

    #[test]
    fn view_height_reserves_minimap_and_status_rows() {
        assert_eq!(Viewport::new(120, 40).view_height(), 40 - 13 - 3);
        assert_eq!(Viewport::new(10, 10).view_height(), -2);
    }

    #[test]
    fn compose_sizes_buffers() {
        let grid = OccupancyGrid::bordered(64, 64);
        let mut player = Player::new(32.0, 32.0, 0.0);
        let vp = Viewport::new(120, 40);
        player.ray_count = vp.width;

        let frame = FrameComposer::default().compose(&grid, &player, vp);
        assert_eq!((frame.view.width(), frame.view.height()), (120, 24));
        assert_eq!((frame.minimap.width(), frame.minimap.height()), (26, 13));
    }

    #[test]
    fn stale_ray_count_still_casts_one_ray_per_column() {
        let grid = OccupancyGrid::bordered(64, 64);
        let vp = Viewport::new(40, 40);
        let mut stale = Player::new(32.0, 32.0, 0.0);
        stale.ray_count = 7;
        let mut synced = stale;
        synced.ray_count = vp.width;

        let composer = FrameComposer::default();
        let a = composer.compose(&grid, &stale, vp);
        let b = composer.compose(&grid, &synced, vp);
        assert_eq!(a.view.width(), 40);
        assert_eq!(a, b);
    }
}
