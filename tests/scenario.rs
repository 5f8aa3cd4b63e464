//! End-to-end walk scenarios driving the full tick pipeline

use std::time::Duration;

use strider::settings::Settings;
use strider::sim::{Facing, TickInput, WorldState, tick};

const DT: f64 = 1.0 / 60.0;

fn held(move_left: bool, move_right: bool) -> TickInput {
    TickInput {
        move_left,
        move_right,
        quit: false,
    }
}

fn run_ticks(state: &mut WorldState, settings: &Settings, input: &TickInput, ticks: u32) {
    for _ in 0..ticks {
        let now = Duration::from_secs_f64(state.time_ticks as f64 * DT);
        tick(state, input, DT, now, settings);
    }
}

#[test]
fn test_walk_right_two_seconds() {
    let settings = Settings::default();
    let mut state = WorldState::new(&settings);
    state.kinematics.position = 220.0;

    run_ticks(&mut state, &settings, &held(false, true), 120);

    // Saturates at top speed well before 2 s
    assert_eq!(state.kinematics.velocity, 300.0);

    // Accel profile: 15 units over the first 5 ticks, then 115 cruise
    // ticks at 5 units each
    let expected = 220.0 + 15.0 + 115.0 * 5.0;
    assert!((state.kinematics.position - expected).abs() < 1e-6);

    // Camera chased the entity, pinned at the right dead-zone bound
    let p = state.kinematics.position.floor() as i32;
    assert_eq!(
        state.camera.scroll_offset,
        p - settings.dead_zone_right()
    );

    // Walk animation ran: frames advanced and stayed in range
    assert!(state.animation.frame_index < 4);
    assert!(state.animation.last_frame_at > Duration::ZERO);
}

#[test]
fn test_drive_to_both_edges_camera_clamped() {
    let settings = Settings::default();
    let mut state = WorldState::new(&settings);

    // 10 s right is far more than enough to pin against the level end
    run_ticks(&mut state, &settings, &held(false, true), 600);
    assert_eq!(state.kinematics.position, settings.max_position());
    assert_eq!(state.camera.scroll_offset, settings.max_scroll());
    // Hard stop leaves velocity untouched
    assert_eq!(state.kinematics.velocity, 300.0);

    run_ticks(&mut state, &settings, &held(true, false), 600);
    assert_eq!(state.kinematics.position, 0.0);
    assert_eq!(state.camera.scroll_offset, 0);
}

#[test]
fn test_facing_hysteresis_through_ticks() {
    let settings = Settings::default();
    let mut state = WorldState::new(&settings);

    // Get moving right, then release and coast to a stop
    run_ticks(&mut state, &settings, &held(false, true), 10);
    run_ticks(&mut state, &settings, &held(false, false), 10);
    assert_eq!(state.kinematics.velocity, 0.0);
    assert_eq!(state.animation.phase.facing(), Facing::Right);

    // Only actual leftward motion flips the sprite
    run_ticks(&mut state, &settings, &held(true, false), 1);
    assert_eq!(state.animation.phase.facing(), Facing::Left);
}

#[test]
fn test_idle_freezes_animation_clock() {
    let settings = Settings::default();
    let mut state = WorldState::new(&settings);

    // 5 s of standing still: the walk frame must not move
    let frame_before = state.animation.frame_index;
    run_ticks(&mut state, &settings, &held(false, false), 300);
    assert_eq!(state.animation.frame_index, frame_before);
}
