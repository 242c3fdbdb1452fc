//! Floyd-Steinberg error diffusion against a pin palette.
//!
//! Processes pixels left-to-right, top-to-bottom. After quantizing each
//! pixel, the error is distributed to neighbouring pixels:
//!
//! ```text
//!        *   7/16
//!  3/16 5/16 1/16
//! ```

use crate::types::{Colour, Palette, Raster};

/// The Floyd-Steinberg diffusion kernel as `(dx, dy, weight)` entries
/// over a divisor of 16. All four weights sum to the full error.
pub const FLOYD_STEINBERG: [(i32, i32, i32); 4] = [
    (1, 0, 7),
    (-1, 1, 3),
    (0, 1, 5),
    (1, 1, 1),
];

/// Kernel weight divisor.
const DIVISOR: i32 = 16;

/// Dither a source raster to palette colours.
///
/// Returns a raster of the same dimensions in which every processed
/// pixel is a palette member. The scan covers rows `1..height` and
/// columns `1..width`: the first row and first column are never
/// quantized and keep the black fill. Boards generated by earlier
/// releases have this border, and printed pages must stay
/// reproducible, so the bound is kept even though it looks like an
/// off-by-one.
///
/// Diffusion runs over a pending-value buffer of signed 32-bit
/// channels seeded from the source, which stays read-only. Pending
/// values are clamped to the 8-bit range when resolved, and each
/// neighbour share is `err * weight / 16` in integer arithmetic
/// (truncation toward zero). Neighbours outside the raster are
/// skipped. Identical input and palette always produce an identical
/// board.
pub fn dither(source: &Raster, palette: &Palette) -> Raster {
    let width = source.width();
    let height = source.height();

    // Pending channel values: source pixel plus accumulated error.
    let mut pending: Vec<[i32; 3]> = source
        .pixels()
        .iter()
        .map(|c| [c.r as i32, c.g as i32, c.b as i32])
        .collect();

    let mut board = Raster::filled(width, height, Colour::BLACK);

    for y in 1..height {
        for x in 1..width {
            let idx = (y * width + x) as usize;
            let current = clamp_colour(pending[idx]);

            let chosen = palette.nearest(current);
            board.set(x, y, chosen);

            let err = [
                current.r as i32 - chosen.r as i32,
                current.g as i32 - chosen.g as i32,
                current.b as i32 - chosen.b as i32,
            ];

            for (dx, dy, weight) in FLOYD_STEINBERG {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;

                if nx >= 0 && nx < width as i64 && ny >= 0 && ny < height as i64 {
                    let n = (ny as u32 * width + nx as u32) as usize;
                    pending[n][0] += err[0] * weight / DIVISOR;
                    pending[n][1] += err[1] * weight / DIVISOR;
                    pending[n][2] += err[2] * weight / DIVISOR;
                }
            }
        }
    }

    board
}

/// Clamp accumulated channel values back into 8-bit range.
fn clamp_colour(channels: [i32; 3]) -> Colour {
    Colour::rgb(
        channels[0].clamp(0, 255) as u8,
        channels[1].clamp(0, 255) as u8,
        channels[2].clamp(0, 255) as u8,
    )
}
