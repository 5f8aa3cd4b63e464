//! Simulation state and core types
//!
//! Created once at startup and mutated in place, one tick at a time.

use std::time::Duration;

use crate::settings::Settings;

/// Horizontal facing of the entity sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Explicit motion phase driving both the animation frame gate and the
/// sprite flip. Facing is carried through `Idle` so the entity keeps
/// looking the way it last walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// At rest; facing preserved from the last movement
    Idle { facing: Facing },
    /// Walking in the given direction
    Moving { facing: Facing },
}

impl MotionPhase {
    /// Current facing regardless of phase
    pub fn facing(self) -> Facing {
        match self {
            Self::Idle { facing } | Self::Moving { facing } => facing,
        }
    }
}

/// Position and velocity along the level axis.
///
/// Position must be fractional: at 60 fps a tick moves a fraction of a
/// pixel at low speeds, and an integer coordinate would never accumulate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Distance along the level axis, pixels
    pub position: f64,
    /// Signed speed, pixels/second
    pub velocity: f64,
}

/// Scrolling camera window over the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Leftmost level coordinate visible in the viewport
    pub scroll_offset: i32,
}

/// Walk-cycle animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Current walk-sheet cell, 0..4
    pub frame_index: u8,
    pub phase: MotionPhase,
    /// Sim time the frame last advanced. Not rebased on stop, so the
    /// first frame after resuming may land early; accepted for simplicity.
    pub last_frame_at: Duration,
}

/// Complete simulation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldState {
    pub kinematics: Kinematics,
    pub camera: Camera,
    pub animation: Animation,
    /// Ticks advanced since start
    pub time_ticks: u64,
}

impl WorldState {
    /// Initial state: entity centered in the viewport, at rest, facing
    /// right, camera at the level's left edge.
    pub fn new(settings: &Settings) -> Self {
        Self {
            kinematics: Kinematics {
                position: f64::from((settings.viewport_width - settings.entity_width) / 2),
                velocity: 0.0,
            },
            camera: Camera { scroll_offset: 0 },
            animation: Animation {
                frame_index: 0,
                phase: MotionPhase::Idle {
                    facing: Facing::Right,
                },
                last_frame_at: Duration::ZERO,
            },
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WorldState::new(&Settings::default());
        assert_eq!(state.kinematics.position, 270.0);
        assert_eq!(state.kinematics.velocity, 0.0);
        assert_eq!(state.camera.scroll_offset, 0);
        assert_eq!(state.animation.frame_index, 0);
        assert_eq!(state.animation.phase.facing(), Facing::Right);
    }

    #[test]
    fn test_phase_facing_carries_through_idle() {
        let phase = MotionPhase::Idle {
            facing: Facing::Left,
        };
        assert_eq!(phase.facing(), Facing::Left);
    }
}
