//! Horizontal motion: acceleration, damping, integration, edge clamping
//!
//! All rates are per-second, scaled by the measured `dt`, so behavior is
//! identical at any frame rate.

use crate::settings::Settings;
use crate::sim::state::Kinematics;
use crate::sim::tick::TickInput;

/// Advance velocity and position by one variable timestep.
///
/// Left and right are independent booleans; holding both cancels to zero
/// net acceleration and takes the damping branch, same as no input.
pub fn update(kin: &mut Kinematics, input: &TickInput, dt: f64, settings: &Settings) {
    let mut delta_v = 0.0;
    if input.move_left {
        delta_v -= settings.accel * dt;
    }
    if input.move_right {
        delta_v += settings.accel * dt;
    }

    if delta_v == 0.0 {
        // No net input: decelerate toward zero, snapping once the
        // remaining speed is under one tick's step so we never
        // oscillate across the sign.
        let step = settings.accel * dt;
        if kin.velocity.abs() <= step {
            kin.velocity = 0.0;
        } else {
            kin.velocity -= step * kin.velocity.signum();
        }
    } else {
        kin.velocity += delta_v;
    }

    kin.velocity = kin.velocity.clamp(-settings.speed_limit, settings.speed_limit);

    kin.position += kin.velocity * dt;
    // Hard stop at the level edges. Velocity is deliberately left alone:
    // the clamp blocks further travel next tick on its own.
    kin.position = kin.position.clamp(0.0, settings.max_position());
}
