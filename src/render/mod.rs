//! Draw descriptors handed to the rendering collaborator
//!
//! The core never rasterizes. Each tick it composes a [`FramePlan`] of
//! plain rectangles and hands it to whatever implements [`RenderFeed`].

pub mod frame;

pub use frame::{FramePlan, Rect, SpriteDraw, compose};

/// Sink for composed frames. Implemented by the real renderer, or by
/// [`NullFeed`] for headless runs.
pub trait RenderFeed {
    fn present(&mut self, frame: &FramePlan);
}

/// Discards every frame; used by the demo binary and loop tests.
#[derive(Debug, Default)]
pub struct NullFeed {
    /// Frames presented so far
    pub frames: u64,
}

impl RenderFeed for NullFeed {
    fn present(&mut self, _frame: &FramePlan) {
        self.frames += 1;
    }
}
