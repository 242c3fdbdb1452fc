//! Core domain types for pushpin.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB pin colour values
//! - `Palette` - ordered pin colour collections with nearest-colour lookup
//! - `Raster` - 2D pixel grids (source image and dithered board)

mod colour;
mod palette;
mod raster;

pub use colour::Colour;
pub use palette::Palette;
pub use raster::Raster;
