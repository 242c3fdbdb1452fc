//! Output sinks for the board pipeline.
//!
//! Writes the dithered board as a PNG and the paginated assembly
//! document as a PDF. The core stays I/O-free; everything here consumes
//! finished pipeline data.

mod pdf;
mod png;

pub use pdf::write_pdf;
pub use png::write_png;
