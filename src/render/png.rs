//! PNG output for dithered boards.
//!
//! Boards are small (one pixel per pin), so the writer supports
//! integer upscaling for a viewable preview.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{PushpinError, Result};
use crate::types::Raster;

/// Write a board to a PNG file.
///
/// # Arguments
///
/// * `board` - The dithered board to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = one pixel per pin)
pub fn write_png(board: &Raster, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = board.width() * scale;
    let height = board.height() * scale;

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for y in 0..board.height() {
        for x in 0..board.width() {
            let c = board.get(x, y);
            let rgb = Rgb([c.r, c.g, c.b]);

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, rgb);
                }
            }
        }
    }

    img.save(path).map_err(|e| PushpinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
