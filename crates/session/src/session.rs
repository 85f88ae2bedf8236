//! The frame loop.
//!
//! Each frame: read the viewport, poll one key, apply at most one action,
//! render, display, sleep. The session owns the grid and the player; the
//! renderer only borrows them.

use std::thread;

use anyhow::Result;

use crate::config::SessionConfig;
use crate::core::{default_world, Motion, Moved, OccupancyGrid, Player, SPAWN, SPAWN_YAW_DEG};
use crate::input::{action_for_key, KeySource};
use crate::status::status_lines;
use crate::term::{DisplaySink, FrameComposer, Viewport, ViewportSource};
use crate::types::PlayerAction;

/// Outcome of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session {
    grid: OccupancyGrid,
    player: Player,
    composer: FrameComposer,
    motion: Motion,
    config: SessionConfig,
    last_viewport: Option<Viewport>,
    frames: u64,
}

impl Session {
    /// A session in the built-in world at the spawn point.
    pub fn new(config: SessionConfig) -> Self {
        let player =
            Player::new(SPAWN.0, SPAWN.1, SPAWN_YAW_DEG.to_radians()).with_fov(config.fov());
        Self::with_world(config, default_world(), player)
    }

    pub fn with_world(config: SessionConfig, grid: OccupancyGrid, player: Player) -> Self {
        Self {
            grid,
            player,
            composer: FrameComposer::default(),
            motion: config.motion(),
            config,
            last_viewport: None,
            frames: 0,
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply a single action between frames.
    pub fn apply(&mut self, action: PlayerAction) -> Step {
        if action == PlayerAction::Quit {
            return Step::Quit;
        }
        if self.player.apply_action(action, &self.grid, self.motion) == Moved::Blocked {
            tracing::debug!(
                action = action.as_str(),
                x = self.player.x,
                z = self.player.z,
                "movement blocked"
            );
        }
        Step::Continue
    }

    /// Run one frame without sleeping.
    pub fn step(
        &mut self,
        keys: &mut impl KeySource,
        display: &mut impl DisplaySink,
        viewports: &mut impl ViewportSource,
    ) -> Result<Step> {
        let viewport = viewports.viewport();
        if self.last_viewport != Some(viewport) {
            tracing::info!(
                width = viewport.width,
                height = viewport.height,
                minimap_size = viewport.minimap_size(),
                view_height = viewport.view_height(),
                "viewport changed"
            );
            self.last_viewport = Some(viewport);
        }
        self.player.ray_count = viewport.width;

        if let Some(action) = keys.poll_key()?.and_then(action_for_key) {
            if self.apply(action) == Step::Quit {
                return Ok(Step::Quit);
            }
        }

        let frame = self.composer.compose(&self.grid, &self.player, viewport);
        display.show_frame(&frame, &status_lines(&self.player))?;
        self.frames += 1;
        Ok(Step::Continue)
    }

    /// Run frames until the player quits.
    pub fn run(
        &mut self,
        keys: &mut impl KeySource,
        display: &mut impl DisplaySink,
        viewports: &mut impl ViewportSource,
    ) -> Result<()> {
        tracing::info!(config = ?self.config, "session started");
        while self.step(keys, display, viewports)? == Step::Continue {
            thread::sleep(self.config.frame_interval);
        }
        tracing::info!(frames = self.frames, "session ended");
        Ok(())
    }
}
