//! Variable timestep simulation tick
//!
//! One call advances the whole core in strict order: motion, then camera,
//! then animation, each reading the state the previous stage just wrote.

use std::time::Duration;

use crate::settings::Settings;
use crate::sim::state::WorldState;
use crate::sim::{animation, camera, motion};

/// Input commands for a single tick, already sampled by the platform layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Quit requested; observed by the loop, ignored by the sim
    pub quit: bool,
}

/// Advance the simulation by one tick.
///
/// `dt` is elapsed seconds since the previous tick; `now` is monotonic
/// time since simulation start. A negative or non-finite `dt` is a caller
/// fault and collapses to a motion no-op rather than poisoning state.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f64, now: Duration, settings: &Settings) {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Invalid dt {dt}, clamping to 0");
        0.0
    };

    motion::update(&mut state.kinematics, input, dt, settings);
    camera::update(&mut state.camera, state.kinematics.position, settings);
    animation::update(&mut state.animation, state.kinematics.velocity, now, settings);

    state.time_ticks += 1;
}
