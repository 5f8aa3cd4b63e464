//! Per-tick frame composition
//!
//! Pure translation from simulation state to draw rectangles: two
//! backdrop copies, the ground strip, and the entity sprite.

use glam::IVec2;

use crate::settings::Settings;
use crate::sim::state::{Facing, WorldState};
use crate::sim::tilemap;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }
}

/// One sprite-sheet draw: source cell, destination, horizontal flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDraw {
    pub src: Rect,
    pub dst: Rect,
    pub flip: bool,
}

/// Everything the rendering collaborator needs for one frame,
/// in back-to-front draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    /// Two full-viewport backdrop copies (second covers the wrap seam)
    pub background: [Rect; 2],
    /// Ground strip, left to right
    pub tiles: Vec<SpriteDraw>,
    /// The walking entity
    pub entity: SpriteDraw,
}

/// Compose the frame for the current state.
pub fn compose(state: &WorldState, settings: &Settings) -> FramePlan {
    let layout = tilemap::layout(state.camera.scroll_offset, settings);
    let tile = settings.tile_size;
    let strip_y = settings.viewport_height - tile;

    let background = layout
        .background_x
        .map(|x| Rect::new(x, 0, settings.viewport_width, settings.viewport_height));

    let tiles = layout
        .tiles
        .iter()
        .map(|t| SpriteDraw {
            src: Rect::new(t.cycle_index as i32 * tile, 0, tile, tile),
            dst: Rect::new(t.x, strip_y, tile, tile),
            flip: false,
        })
        .collect();

    let anim = &state.animation;
    let width = settings.entity_width;
    let entity = SpriteDraw {
        src: Rect::new(i32::from(anim.frame_index) * width, 0, width, tile),
        dst: Rect::new(
            state.kinematics.position.floor() as i32 - state.camera.scroll_offset,
            settings.ground_y(),
            width,
            tile,
        ),
        flip: anim.phase.facing() == Facing::Left,
    };

    FramePlan {
        background,
        tiles,
        entity,
    }
}
