//! Session configuration from environment variables.
//!
//! - `RAYCAST_FOV_DEG`: horizontal field of view in degrees, below 180 (default: 60)
//! - `RAYCAST_MOVE_SPEED`: cells per forward/backward step (default: 0.2)
//! - `RAYCAST_TURN_DEG`: degrees per turn step (default: 5)
//! - `RAYCAST_FRAME_MS`: frame interval in milliseconds (default: 33)
//! - `RAYCAST_LOG`: tracing filter directive (default: "info")
//! - `RAYCAST_LOG_PATH`: log file; logging is off when unset
//!
//! Values that fail to parse fall back to their defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::Motion;
use crate::types::{DEFAULT_FOV_DEG, DEFAULT_MOVE_SPEED, DEFAULT_TURN_DEG, FRAME_MS};

/// Exclusive upper bound on the field of view. At 180 degrees and beyond the
/// edge rays point sideways or backwards and fisheye correction goes to zero.
const MAX_FOV_DEG: f32 = 180.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub fov_deg: f32,
    pub move_speed: f32,
    pub turn_deg: f32,
    pub frame_interval: Duration,
    pub log_filter: String,
    pub log_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            move_speed: DEFAULT_MOVE_SPEED,
            turn_deg: DEFAULT_TURN_DEG,
            frame_interval: Duration::from_millis(FRAME_MS),
            log_filter: "info".to_string(),
            log_path: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_f32 = |key: &str, default: f32| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };
        let fov_deg = Some(parse_f32("RAYCAST_FOV_DEG", defaults.fov_deg))
            .filter(|v| *v < MAX_FOV_DEG)
            .unwrap_or(defaults.fov_deg);

        let frame_interval = lookup("RAYCAST_FRAME_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame_interval);

        Self {
            fov_deg,
            move_speed: parse_f32("RAYCAST_MOVE_SPEED", defaults.move_speed),
            turn_deg: parse_f32("RAYCAST_TURN_DEG", defaults.turn_deg),
            frame_interval,
            log_filter: lookup("RAYCAST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_path: lookup("RAYCAST_LOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn fov(&self) -> f32 {
        self.fov_deg.to_radians()
    }

    pub fn motion(&self) -> Motion {
        Motion {
            move_speed: self.move_speed,
            turn_speed: self.turn_deg.to_radians(),
        }
    }
}
