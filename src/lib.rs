//! Strider - a side-scrolling walk simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, camera, animation, tiles)
//! - `render`: Draw descriptors handed to a rendering collaborator
//! - `platform`: Input-source abstraction
//! - `runner`: The per-tick game loop
//!
//! The simulation is pure and frame-rate independent: every tick takes a
//! measured `dt` plus the already-sampled input booleans, and no module in
//! `sim` touches a window, a texture, or a clock of its own.

pub mod platform;
pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Viewport (camera window) size in pixels
    pub const VIEWPORT_WIDTH: i32 = 640;
    pub const VIEWPORT_HEIGHT: i32 = 480;

    /// Total level length along the scroll axis
    pub const LEVEL_LENGTH: i32 = 2000;
    /// Ground tile edge length (tiles are square)
    pub const TILE_SIZE: i32 = 100;
    /// Entity sprite width (one cell of the walk sheet)
    pub const ENTITY_WIDTH: i32 = 100;

    /// Top walking speed, units/second.
    /// The frame-locked original moved 5 px/frame at 60 fps.
    pub const SPEED_LIMIT: f64 = 300.0;
    /// Acceleration (and deceleration) magnitude, units/second².
    /// 1 px/frame² at 60 fps; reaches top speed in 1/12 s.
    pub const ACCEL: f64 = 3600.0;

    /// Real time between walk-animation frames
    pub const FRAME_INTERVAL_MS: u64 = 100;
    /// Frames in the walk cycle (also the ground-tile cycle length)
    pub const WALK_FRAMES: u8 = 4;
    pub const TILE_CYCLE: i32 = 4;
}
