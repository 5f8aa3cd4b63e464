//! Walk-cycle clock and facing
//!
//! Frame advance is gated on real time, not frame count, so animation
//! speed is independent of render rate. The clock freezes while idle.

use std::time::Duration;

use crate::consts::WALK_FRAMES;
use crate::settings::Settings;
use crate::sim::state::{Animation, Facing, MotionPhase};

/// Transition the motion phase from the current velocity and advance the
/// walk frame when the interval has elapsed.
pub fn update(anim: &mut Animation, velocity: f64, now: Duration, settings: &Settings) {
    anim.phase = if velocity > 0.0 {
        MotionPhase::Moving {
            facing: Facing::Right,
        }
    } else if velocity < 0.0 {
        MotionPhase::Moving {
            facing: Facing::Left,
        }
    } else {
        // At rest the last facing persists; no flip flicker at zero.
        MotionPhase::Idle {
            facing: anim.phase.facing(),
        }
    };

    if let MotionPhase::Moving { .. } = anim.phase {
        // last_frame_at is not rebased on stop, so the first frame after
        // resuming may come early. Accepted tradeoff: it reads as reduced
        // input lag, not drift.
        if now.saturating_sub(anim.last_frame_at) > settings.frame_interval() {
            anim.frame_index = (anim.frame_index + 1) % WALK_FRAMES;
            anim.last_frame_at = now;
        }
    }
}
