//! Spritesheet slicing
//!
//! Partitions an extracted sheet into a fixed grid of equal tiles in
//! row-major order. Tile size is the floor-divided sheet size; sheets that
//! do not divide evenly lose their remainder pixels silently, which matches
//! how the downstream frame consumer expects the grids to be cut.

use crate::crop::extract_region;
use clawkit_core::{PixelFrame, Rect};

/// A fixed slicing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceGrid {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
}

impl SliceGrid {
    /// Create a grid
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// A single horizontal strip of `frames` tiles
    pub const fn strip(frames: u32) -> Self {
        Self {
            rows: 1,
            cols: frames,
        }
    }

    /// Tile size for a given sheet, floor-divided
    pub const fn tile_size(&self, sheet_width: u32, sheet_height: u32) -> (u32, u32) {
        (sheet_width / self.cols, sheet_height / self.rows)
    }

    /// Total number of tiles
    pub const fn len(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Cut a sheet into `rows * cols` tiles in row-major order
pub fn slice(sheet: &PixelFrame, grid: SliceGrid) -> Vec<PixelFrame> {
    if grid.is_empty() {
        return Vec::new();
    }

    let (tile_w, tile_h) = grid.tile_size(sheet.width, sheet.height);
    let mut tiles = Vec::with_capacity(grid.len());

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let region = Rect::new((col * tile_w) as i32, (row * tile_h) as i32, tile_w, tile_h);
            tiles.push(extract_region(sheet, region));
        }
    }

    tiles
}

/// Name for the tile at `index`: the positional table entry, or `frame_N`
pub fn frame_name(index: usize, names: &[&str]) -> String {
    match names.get(index) {
        Some(name) => (*name).to_string(),
        None => format!("frame_{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_slice() {
        let sheet = PixelFrame::new(296, 114);
        let tiles = slice(&sheet, SliceGrid::new(2, 4));
        assert_eq!(tiles.len(), 8);
        for tile in &tiles {
            assert_eq!(tile.dimensions(), (74, 57));
        }
    }

    #[test]
    fn test_remainder_discarded() {
        let sheet = PixelFrame::new(298, 114);
        let tiles = slice(&sheet, SliceGrid::new(2, 4));
        assert_eq!(tiles.len(), 8);
        for tile in &tiles {
            assert_eq!(tile.dimensions(), (74, 57));
        }
        // 2 rightmost columns dropped
        let total: u64 = tiles.iter().map(|t| t.width as u64 * t.height as u64).sum();
        assert!(total <= 298 * 114);
        assert_eq!(total, 8 * 74 * 57);
    }

    #[test]
    fn test_row_major_order() {
        let mut sheet = PixelFrame::new(4, 2);
        // tag each 1x1 tile with its index in the red channel
        for y in 0..2 {
            for x in 0..4 {
                sheet.set_pixel(x, y, [(y * 4 + x) as u8, 0, 0, 255]);
            }
        }
        let tiles = slice(&sheet, SliceGrid::new(2, 4));
        for (i, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.get_pixel(0, 0), Some([i as u8, 0, 0, 255]));
        }
    }

    #[test]
    fn test_strip() {
        let sheet = PixelFrame::new(140, 75);
        let tiles = slice(&sheet, SliceGrid::strip(4));
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].dimensions(), (35, 75));
    }

    #[test]
    fn test_undersized_sheet_gives_empty_tiles() {
        let sheet = PixelFrame::new(3, 1);
        let tiles = slice(&sheet, SliceGrid::new(2, 4));
        assert_eq!(tiles.len(), 8);
        assert!(tiles.iter().all(|t| t.is_empty()));
    }

    #[test]
    fn test_frame_name_lookup() {
        let names = ["idle", "walk"];
        assert_eq!(frame_name(0, &names), "idle");
        assert_eq!(frame_name(1, &names), "walk");
        assert_eq!(frame_name(2, &names), "frame_2");
    }
}
