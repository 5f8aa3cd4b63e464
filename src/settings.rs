//! Startup configuration
//!
//! All tunables the simulation reads, with the classic defaults. Loaded
//! once at startup from an optional JSON file; never mutated afterwards.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Level geometry and motion tuning, fixed for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Camera window width in pixels
    pub viewport_width: i32,
    /// Camera window height in pixels
    pub viewport_height: i32,
    /// Level length along the scroll axis
    pub level_length: i32,
    /// Ground tile edge length
    pub tile_size: i32,
    /// Entity sprite width
    pub entity_width: i32,
    /// Top speed, units/second
    pub speed_limit: f64,
    /// Acceleration magnitude, units/second²
    pub accel: f64,
    /// Real time between walk-animation frames, milliseconds
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: consts::VIEWPORT_WIDTH,
            viewport_height: consts::VIEWPORT_HEIGHT,
            level_length: consts::LEVEL_LENGTH,
            tile_size: consts::TILE_SIZE,
            entity_width: consts::ENTITY_WIDTH,
            speed_limit: consts::SPEED_LIMIT,
            accel: consts::ACCEL,
            frame_interval_ms: consts::FRAME_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any
    /// failure (missing file, unreadable, bad JSON). Non-fatal by design.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Animation frame interval as a duration
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Left edge of the camera dead zone, viewport-local
    pub fn dead_zone_left(&self) -> i32 {
        self.viewport_width / 3 - self.entity_width / 2
    }

    /// Right edge of the camera dead zone, viewport-local
    pub fn dead_zone_right(&self) -> i32 {
        2 * self.viewport_width / 3 - self.entity_width / 2
    }

    /// Largest legal entity position
    pub fn max_position(&self) -> f64 {
        f64::from(self.level_length - self.entity_width)
    }

    /// Largest legal scroll offset
    pub fn max_scroll(&self) -> i32 {
        self.level_length - self.viewport_width
    }

    /// Fixed y coordinate the entity is drawn at (stands on the ground strip)
    pub fn ground_y(&self) -> i32 {
        self.viewport_height - 2 * self.tile_size
    }
}
