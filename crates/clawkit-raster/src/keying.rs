//! Gray-band background keying
//!
//! The Arena composite was exported over a light-gray checkerboard instead
//! of real transparency. This filter recovers the alpha channel: any pixel
//! whose channels agree within a tolerance (near-gray) and whose gray level
//! sits inside a calibrated band becomes fully transparent.
//!
//! The default band is tuned to the checker grays of the one known source
//! export (192/200/204-ish). On other inputs it will eat genuine near-gray
//! foreground; calibrate a new `GrayKey` rather than widening the default.

use clawkit_core::PixelFrame;

/// Keying parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayKey {
    /// Maximum pairwise channel difference (exclusive) for "near-gray"
    pub channel_tolerance: u8,
    /// Lowest gray level keyed out (inclusive)
    pub gray_min: u8,
    /// Highest gray level keyed out (inclusive)
    pub gray_max: u8,
}

impl Default for GrayKey {
    fn default() -> Self {
        // Calibration for the checkered backdrop of the Arena composite.
        Self {
            channel_tolerance: 10,
            gray_min: 180,
            gray_max: 220,
        }
    }
}

impl GrayKey {
    /// Create with explicit parameters
    pub const fn new(channel_tolerance: u8, gray_min: u8, gray_max: u8) -> Self {
        Self {
            channel_tolerance,
            gray_min,
            gray_max,
        }
    }

    /// Whether a pixel matches the background band
    ///
    /// The red channel is the gray probe; for pixels that pass the
    /// near-gray test all channels agree within the tolerance anyway.
    pub fn is_background(&self, rgba: [u8; 4]) -> bool {
        let [r, g, b, _] = rgba;
        let near_gray = r.abs_diff(g) < self.channel_tolerance
            && g.abs_diff(b) < self.channel_tolerance
            && r.abs_diff(b) < self.channel_tolerance;
        near_gray && r >= self.gray_min && r <= self.gray_max
    }

    /// Zero the alpha of every background pixel, in place
    pub fn apply(&self, frame: &mut PixelFrame) {
        for px in frame.pixels_mut() {
            if self.is_background([px[0], px[1], px[2], px[3]]) {
                px[3] = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_gray_keyed() {
        let key = GrayKey::default();
        let mut frame = PixelFrame::new(1, 1);
        frame.set_pixel(0, 0, [200, 200, 200, 255]);
        key.apply(&mut frame);
        assert_eq!(frame.get_pixel(0, 0), Some([200, 200, 200, 0]));
    }

    #[test]
    fn test_saturated_pixel_untouched() {
        let key = GrayKey::default();
        let mut frame = PixelFrame::new(1, 1);
        frame.set_pixel(0, 0, [200, 0, 0, 255]);
        key.apply(&mut frame);
        assert_eq!(frame.get_pixel(0, 0), Some([200, 0, 0, 255]));
    }

    #[test]
    fn test_gray_outside_band_untouched() {
        let key = GrayKey::default();
        let mut frame = PixelFrame::new(2, 1);
        frame.set_pixel(0, 0, [100, 100, 100, 255]);
        frame.set_pixel(1, 0, [240, 240, 240, 255]);
        key.apply(&mut frame);
        assert_eq!(frame.get_pixel(0, 0), Some([100, 100, 100, 255]));
        assert_eq!(frame.get_pixel(1, 0), Some([240, 240, 240, 255]));
    }

    #[test]
    fn test_band_bounds_inclusive() {
        let key = GrayKey::default();
        assert!(key.is_background([180, 180, 180, 255]));
        assert!(key.is_background([220, 220, 220, 255]));
        assert!(!key.is_background([179, 179, 179, 255]));
        assert!(!key.is_background([221, 221, 221, 255]));
    }

    #[test]
    fn test_tolerance_exclusive() {
        let key = GrayKey::default();
        // 9 apart on every pair: near-gray
        assert!(key.is_background([200, 209, 200, 255]));
        // 10 apart: not near-gray
        assert!(!key.is_background([200, 210, 200, 255]));
    }

    #[test]
    fn test_idempotent() {
        let key = GrayKey::default();
        let mut frame = PixelFrame::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let v = 170 + (x * 4 + y * 16) as u8;
                frame.set_pixel(x, y, [v, v, v, 255]);
            }
        }
        frame.set_pixel(0, 0, [255, 40, 0, 255]);

        let mut once = frame.clone();
        key.apply(&mut once);
        let mut twice = once.clone();
        key.apply(&mut twice);
        assert_eq!(once, twice);
    }
}
