//! Background and ground-tile layout
//!
//! Pure function of the scroll offset: no state, safe to call any number
//! of times per tick.

use crate::consts::TILE_CYCLE;
use crate::settings::Settings;

/// One ground tile to draw: source cell in the brick sheet plus the
/// viewport-local x it lands at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Index into the repeating tile cycle, 0..4
    pub cycle_index: usize,
    /// Viewport-local x offset (first tile may start off-screen left)
    pub x: i32,
}

/// Draw offsets for one frame of background and ground strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    /// X offsets for two copies of the background; together they cover the
    /// viewport under wraparound.
    pub background_x: [i32; 2],
    /// Ground tiles, left to right, covering the full viewport width
    pub tiles: Vec<TilePlacement>,
}

/// Lay out the backdrop and ground strip for the given scroll offset.
pub fn layout(scroll_offset: i32, settings: &Settings) -> TileLayout {
    let bg_rem = scroll_offset % settings.viewport_width;
    let background_x = [-bg_rem, settings.viewport_width - bg_rem];

    let mut tiles = Vec::new();
    let mut x = -(scroll_offset % settings.tile_size);
    let mut c = ((scroll_offset % (settings.tile_size * TILE_CYCLE)) / settings.tile_size) as usize;
    while x < settings.viewport_width {
        tiles.push(TilePlacement { cycle_index: c, x });
        x += settings.tile_size;
        c = (c + 1) % TILE_CYCLE as usize;
    }

    TileLayout {
        background_x,
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_scroll() {
        let settings = Settings::default();
        let l = layout(0, &settings);

        assert_eq!(l.background_x, [0, 640]);
        assert_eq!(l.tiles.len(), 7);
        assert_eq!(l.tiles[0], TilePlacement { cycle_index: 0, x: 0 });
        assert_eq!(l.tiles[6], TilePlacement { cycle_index: 2, x: 600 });
    }

    #[test]
    fn test_partial_tile_scroll() {
        let settings = Settings::default();
        let l = layout(250, &settings);

        assert_eq!(l.background_x, [-250, 390]);
        // 250 % 100 = 50 into a tile; cycle starts at (250 % 400) / 100 = 2
        assert_eq!(
            l.tiles[0],
            TilePlacement {
                cycle_index: 2,
                x: -50
            }
        );
        assert_eq!(l.tiles[1], TilePlacement { cycle_index: 3, x: 50 });
        assert_eq!(l.tiles[2], TilePlacement { cycle_index: 0, x: 150 });
    }

    #[test]
    fn test_viewport_always_covered() {
        let settings = Settings::default();
        for scroll in 0..=settings.max_scroll() {
            let l = layout(scroll, &settings);
            let first = l.tiles.first().unwrap();
            let last = l.tiles.last().unwrap();
            assert!(first.x <= 0);
            assert!(last.x + settings.tile_size >= settings.viewport_width);
            // Consecutive cycle indices
            for pair in l.tiles.windows(2) {
                assert_eq!(pair[1].cycle_index, (pair[0].cycle_index + 1) % 4);
                assert_eq!(pair[1].x, pair[0].x + settings.tile_size);
            }
        }
    }

    #[test]
    fn test_background_wraparound_seam() {
        let settings = Settings::default();
        // One pixel before the seam and at the seam
        assert_eq!(layout(639, &settings).background_x, [-639, 1]);
        assert_eq!(layout(640, &settings).background_x, [0, 640]);
    }
}
