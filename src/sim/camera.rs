//! Scrolling camera with a dead-zone hysteresis
//!
//! The camera is sticky: while the entity stays inside the middle third of
//! the viewport nothing scrolls, and when it pushes past either bound the
//! offset moves by exactly enough to pin the entity at that bound.

use crate::settings::Settings;
use crate::sim::state::Camera;

/// Track the entity position, then clamp to the level.
pub fn update(camera: &mut Camera, position: f64, settings: &Settings) {
    let p = position.floor() as i32;
    let left = settings.dead_zone_left();
    let right = settings.dead_zone_right();

    if p > camera.scroll_offset + right {
        camera.scroll_offset = p - right;
    } else if p < camera.scroll_offset + left {
        camera.scroll_offset = p - left;
    }

    camera.scroll_offset = camera.scroll_offset.clamp(0, settings.max_scroll());
}
