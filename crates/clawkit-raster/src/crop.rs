//! Region extraction
//!
//! Crops a rectangle out of a source frame. The rectangle is clamped to the
//! source bounds first; geometry alone never fails, a fully-outside region
//! just produces an empty frame.

use clawkit_core::{PixelFrame, Rect};

/// Copy the clamped intersection of `region` out of `source`
pub fn extract_region(source: &PixelFrame, region: Rect) -> PixelFrame {
    let clamped = region.clamped_to(source.width, source.height);
    let mut out = PixelFrame::new(clamped.width, clamped.height);

    for row in 0..clamped.height {
        out.copy_row(
            source,
            clamped.x as u32,
            clamped.y as u32 + row,
            0,
            row,
            clamped.width,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_frame(width: u32, height: u32) -> PixelFrame {
        let mut frame = PixelFrame::new(width, height);
        frame.fill([128, 128, 128, 255]);
        frame
    }

    #[test]
    fn test_in_bounds_crop_exact_dimensions() {
        let source = opaque_frame(1024, 559);
        let crop = extract_region(&source, Rect::new(0, 12, 295, 115));
        assert_eq!(crop.dimensions(), (295, 115));
    }

    #[test]
    fn test_partial_crop_clamps() {
        let source = opaque_frame(1024, 559);
        let crop = extract_region(&source, Rect::new(1000, 12, 295, 115));
        assert_eq!(crop.dimensions(), (24, 115));
    }

    #[test]
    fn test_outside_crop_is_empty() {
        let source = opaque_frame(1024, 559);
        let crop = extract_region(&source, Rect::new(2000, 600, 295, 115));
        assert!(crop.is_empty());
    }

    #[test]
    fn test_crop_copies_pixels() {
        let mut source = PixelFrame::new(10, 10);
        source.set_pixel(4, 6, [1, 2, 3, 4]);
        let crop = extract_region(&source, Rect::new(3, 5, 4, 4));
        assert_eq!(crop.get_pixel(1, 1), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_source_untouched() {
        let source = opaque_frame(16, 16);
        let before = source.clone();
        let _ = extract_region(&source, Rect::new(2, 2, 8, 8));
        assert_eq!(source, before);
    }
}
