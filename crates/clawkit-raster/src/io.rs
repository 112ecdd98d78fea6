//! PNG/JPEG boundary
//!
//! The only place pixels touch the filesystem. Decoding promotes everything
//! to RGBA8 so the rest of the pipeline never sees another format.

use clawkit_core::PixelFrame;
use image::{ImageBuffer, Rgba};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raster I/O errors
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load an image file as RGBA8
pub fn load_rgba(path: impl AsRef<Path>) -> Result<PixelFrame, RasterError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RasterError::SourceNotFound(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|e| RasterError::Decode(e.to_string()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    // length always matches width * height * 4 for a decoded buffer
    Ok(PixelFrame::from_raw(width, height, img.into_raw())
        .unwrap_or_else(|| PixelFrame::new(0, 0)))
}

/// Save a frame as PNG
pub fn save_png(frame: &PixelFrame, path: impl AsRef<Path>) -> Result<(), RasterError> {
    let buffer: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(frame.width, frame.height, frame.as_raw().to_vec())
            .ok_or_else(|| RasterError::Encode("buffer size mismatch".to_string()))?;

    buffer
        .save(path.as_ref())
        .map_err(|e| RasterError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source() {
        let err = load_rgba("no/such/image.png").unwrap_err();
        assert!(matches!(err, RasterError::SourceNotFound(_)));
    }

    #[test]
    fn test_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut frame = PixelFrame::new(5, 3);
        frame.set_pixel(2, 1, [10, 200, 30, 128]);
        save_png(&frame, &path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.dimensions(), (5, 3));
        assert_eq!(loaded.get_pixel(2, 1), Some([10, 200, 30, 128]));
    }
}
