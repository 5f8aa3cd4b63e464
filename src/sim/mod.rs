//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable timestep, sanitized once at the tick boundary
//! - Monotonic `Duration` timestamps only (no wrapping counters)
//! - No rendering or platform dependencies
//!
//! Per-tick ordering is strict and single-writer: motion first, then the
//! camera and animation both read the kinematics updated this same tick.

pub mod animation;
pub mod camera;
pub mod motion;
pub mod state;
pub mod tick;
pub mod tilemap;

pub use state::{Animation, Camera, Facing, Kinematics, MotionPhase, WorldState};
pub use tick::{TickInput, tick};
pub use tilemap::{TileLayout, TilePlacement};
