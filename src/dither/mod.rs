//! Error diffusion dithering.
//!
//! Quantizes a source raster to an arbitrary pin palette while
//! propagating the per-pixel quantization error to unprocessed
//! neighbours, preserving average tone across the board.

mod floyd_steinberg;

pub use floyd_steinberg::{dither, FLOYD_STEINBERG};
