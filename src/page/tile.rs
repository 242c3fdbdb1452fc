//! Single-page drawing assembly.
//!
//! Turns one page cell into a drawing payload: where the scaled cell
//! image lands on the physical page, the alignment grid laid over it,
//! and the page label. The payload is pure data; the PDF writer in
//! `render::pdf` consumes it. Coordinates are PDF points with the
//! origin at the bottom-left of the page.

use crate::types::{Colour, Raster};

/// Physical page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US letter, 612x792 pt.
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// A straight line segment on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// Everything needed to draw one output page.
#[derive(Debug, Clone)]
pub struct PageDrawing {
    /// The page's share of the board, unscaled.
    pub cell: Raster,
    /// Bottom-left corner of the scaled image.
    pub origin: (f32, f32),
    pub scaled_width: f32,
    pub scaled_height: f32,
    /// Alignment grid: one line per pin-row and pin-column boundary.
    pub grid: Vec<Segment>,
    pub grid_colour: Colour,
    pub label: String,
    /// Baseline anchor for the label text.
    pub label_pos: (f32, f32),
}

/// Gap between the image's right edge and the page label, in points.
const LABEL_GAP: f32 = 5.0;

/// Assemble the drawing for one page.
///
/// The cell is scaled uniformly to fit inside the page margins,
/// preserving aspect ratio, and placed at `(margin, margin)`. The grid
/// has `width + 1` vertical and `height + 1` horizontal lines spaced at
/// one scaled pin, spanning the full image extent, so adjacent pages
/// can be aligned pin-for-pin. The label sits to the right of the
/// image at half its height.
pub fn render_page(
    cell: &Raster,
    page: PageSize,
    margin: f32,
    grid_colour: Colour,
    label: &str,
) -> PageDrawing {
    let width = cell.width();
    let height = cell.height();

    let scale_x = (page.width - 2.0 * margin) / width as f32;
    let scale_y = (page.height - 2.0 * margin) / height as f32;
    let scale = scale_x.min(scale_y);

    let scaled_width = width as f32 * scale;
    let scaled_height = height as f32 * scale;

    let pitch_x = scaled_width / width as f32;
    let pitch_y = scaled_height / height as f32;

    let mut grid = Vec::with_capacity((width + height + 2) as usize);
    for i in 0..=width {
        let x = margin + i as f32 * pitch_x;
        grid.push(Segment {
            from: (x, margin),
            to: (x, margin + scaled_height),
        });
    }
    for j in 0..=height {
        let y = margin + j as f32 * pitch_y;
        grid.push(Segment {
            from: (margin, y),
            to: (margin + scaled_width, y),
        });
    }

    PageDrawing {
        cell: cell.clone(),
        origin: (margin, margin),
        scaled_width,
        scaled_height,
        grid,
        grid_colour,
        label: label.to_string(),
        label_pos: (margin + scaled_width + LABEL_GAP, margin + scaled_height / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(width: u32, height: u32) -> Raster {
        Raster::filled(width, height, Colour::WHITE)
    }

    #[test]
    fn test_render_page_grid_line_counts() {
        let drawing = render_page(&cell(15, 22), PageSize::LETTER, 10.0, Colour::BLACK, "A1");
        // 16 vertical + 23 horizontal boundaries.
        assert_eq!(drawing.grid.len(), 16 + 23);
    }

    #[test]
    fn test_render_page_uniform_scale() {
        let drawing = render_page(&cell(10, 40), PageSize::LETTER, 10.0, Colour::BLACK, "A1");
        // Height-limited: scale = (792 - 20) / 40 = 19.3
        let scale = (792.0_f32 - 20.0) / 40.0;
        assert!((drawing.scaled_height - 40.0 * scale).abs() < 1e-3);
        assert!((drawing.scaled_width - 10.0 * scale).abs() < 1e-3);
        // Aspect preserved.
        let aspect = drawing.scaled_width / drawing.scaled_height;
        assert!((aspect - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_render_page_fits_inside_margins() {
        let page = PageSize::LETTER;
        let margin = 10.0;
        let drawing = render_page(&cell(29, 42), page, margin, Colour::BLACK, "B2");
        assert!(drawing.scaled_width <= page.width - 2.0 * margin + 1e-3);
        assert!(drawing.scaled_height <= page.height - 2.0 * margin + 1e-3);
        assert_eq!(drawing.origin, (margin, margin));
    }

    #[test]
    fn test_render_page_grid_spans_image() {
        let drawing = render_page(&cell(8, 8), PageSize::LETTER, 10.0, Colour::BLACK, "A1");

        // First vertical line sits on the left edge, last on the right.
        let first = drawing.grid[0];
        assert_eq!(first.from, (10.0, 10.0));
        assert!((first.to.1 - (10.0 + drawing.scaled_height)).abs() < 1e-3);

        let last_vertical = drawing.grid[8];
        assert!((last_vertical.from.0 - (10.0 + drawing.scaled_width)).abs() < 1e-3);
    }

    #[test]
    fn test_render_page_label() {
        let drawing = render_page(&cell(29, 42), PageSize::LETTER, 10.0, Colour::BLACK, "C3");
        assert_eq!(drawing.label, "C3");
        assert!((drawing.label_pos.0 - (10.0 + drawing.scaled_width + 5.0)).abs() < 1e-3);
        assert!((drawing.label_pos.1 - (10.0 + drawing.scaled_height / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_render_page_keeps_cell_pixels() {
        let mut c = cell(3, 3);
        c.set(1, 1, Colour::rgb(200, 10, 10));
        let drawing = render_page(&c, PageSize::LETTER, 10.0, Colour::BLACK, "A1");
        assert_eq!(drawing.cell.get(1, 1), Colour::rgb(200, 10, 10));
    }
}
