//! Pagination driver.
//!
//! Walks the page grid in row-major order, crops the board into cells,
//! and assembles one drawing per page.

use crate::types::{Colour, Raster};

use super::partition::{partition, PageLayout};
use super::tile::{render_page, PageDrawing, PageSize};

/// Page geometry options for the paginated document.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub page: PageSize,
    pub margin: f32,
    pub grid_colour: Colour,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page: PageSize::LETTER,
            margin: 10.0,
            grid_colour: Colour::BLACK,
        }
    }
}

/// A fully paginated board: the layout plus one drawing per page, in
/// row-major page order.
#[derive(Debug, Clone)]
pub struct Document {
    pub layout: PageLayout,
    pub page_size: PageSize,
    pub pages: Vec<PageDrawing>,
}

/// Split a board into labelled page drawings.
///
/// Pages come out in row-major order (`A1, A2, ..., B1, ...`). Every
/// cell crop is exactly `cell_width x cell_height`; the partition
/// arithmetic guarantees crops stay inside the board, so no page is
/// ever zero-area.
pub fn paginate(board: &Raster, options: &PageOptions) -> Document {
    let layout = partition(board.width(), board.height());

    let mut pages = Vec::with_capacity(layout.page_count() as usize);
    for cell in layout.cells() {
        let raster = board.crop(
            cell.start_col,
            cell.start_row,
            layout.cell_width,
            layout.cell_height,
        );
        pages.push(render_page(
            &raster,
            options.page,
            options.margin,
            options.grid_colour,
            &cell.label(),
        ));
    }

    Document {
        layout,
        page_size: options.page,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u32, height: u32) -> Raster {
        let mut r = Raster::filled(width, height, Colour::BLACK);
        for y in 0..height {
            for x in 0..width {
                r.set(x, y, Colour::rgb((x % 256) as u8, (y % 256) as u8, 0));
            }
        }
        r
    }

    #[test]
    fn test_paginate_single_page() {
        let doc = paginate(&board(20, 30), &PageOptions::default());
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].label, "A1");
        assert_eq!(doc.pages[0].cell.width(), 20);
        assert_eq!(doc.pages[0].cell.height(), 30);
    }

    #[test]
    fn test_paginate_row_major_labels() {
        let doc = paginate(&board(87, 84), &PageOptions::default());
        let labels: Vec<&str> = doc.pages.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["A1", "A2", "A3", "B1", "B2", "B3"]);
    }

    #[test]
    fn test_paginate_cells_carry_board_pixels() {
        let b = board(60, 50);
        let doc = paginate(&b, &PageOptions::default());
        assert_eq!(doc.layout.pages_wide, 3);
        assert_eq!(doc.layout.pages_tall, 2);

        // Page B2 starts at (cell_width, cell_height) in board space.
        let page = &doc.pages[4];
        assert_eq!(page.label, "B2");
        let cw = doc.layout.cell_width;
        let ch = doc.layout.cell_height;
        assert_eq!(page.cell.get(0, 0), b.get(cw, ch));
    }

    #[test]
    fn test_paginate_uniform_cell_sizes() {
        let doc = paginate(&board(31, 45), &PageOptions::default());
        assert_eq!(doc.pages.len(), 4);
        for page in &doc.pages {
            assert_eq!(page.cell.width(), 15);
            assert_eq!(page.cell.height(), 22);
        }
    }

    #[test]
    fn test_paginate_options_flow_through() {
        let options = PageOptions {
            margin: 20.0,
            grid_colour: Colour::rgb(40, 40, 40),
            ..PageOptions::default()
        };
        let doc = paginate(&board(10, 10), &options);
        assert_eq!(doc.pages[0].origin, (20.0, 20.0));
        assert_eq!(doc.pages[0].grid_colour, Colour::rgb(40, 40, 40));
    }
}
