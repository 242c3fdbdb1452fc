//! Board pagination.
//!
//! Splits a dithered board into fixed-size printable pages: partition
//! arithmetic, per-page drawing assembly (scaled blit, alignment grid,
//! label), and the driver composing them into a full document.

mod document;
mod partition;
mod tile;

pub use document::{paginate, Document, PageOptions};
pub use partition::{partition, PageCell, PageLayout, PAGE_UNIT_HEIGHT, PAGE_UNIT_WIDTH};
pub use tile::{render_page, PageDrawing, PageSize, Segment};
