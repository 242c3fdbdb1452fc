//! Page partition arithmetic.
//!
//! A board is reproduced at one pin per centimetre on A3 sheets, so a
//! page holds a fixed number of pins per axis. Page counts use ceiling
//! division; per-page cell extents use floor division. When a dimension
//! does not divide evenly the remainder strip at the far edge belongs
//! to no page. That strip has always been dropped by this generator and
//! assembled boards depend on the exact cell arithmetic, so it stays.

use serde::Serialize;

/// Pins per page horizontally (29.7 cm truncated to whole pins).
pub const PAGE_UNIT_WIDTH: u32 = 29;

/// Pins per page vertically (42.0 cm).
pub const PAGE_UNIT_HEIGHT: u32 = 42;

/// The page grid for a board: how many pages per axis and the pixel
/// extent every page receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub pages_wide: u32,
    pub pages_tall: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

/// The board sub-rectangle assigned to one page,
/// `[start_col, end_col) x [start_row, end_row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCell {
    pub row: u32,
    pub col: u32,
    pub start_col: u32,
    pub end_col: u32,
    pub start_row: u32,
    pub end_row: u32,
}

/// Compute the page grid for a board of the given pixel dimensions.
///
/// Requires `width >= 1` and `height >= 1`; zero-size boards are
/// rejected upstream before pagination runs.
pub fn partition(width: u32, height: u32) -> PageLayout {
    debug_assert!(width >= 1 && height >= 1);

    let pages_wide = width / PAGE_UNIT_WIDTH + (width % PAGE_UNIT_WIDTH != 0) as u32;
    let pages_tall = height / PAGE_UNIT_HEIGHT + (height % PAGE_UNIT_HEIGHT != 0) as u32;

    PageLayout {
        pages_wide,
        pages_tall,
        cell_width: width / pages_wide,
        cell_height: height / pages_tall,
    }
}

impl PageLayout {
    /// Total number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages_wide * self.pages_tall
    }

    /// Board width actually covered by pages.
    pub fn covered_width(&self) -> u32 {
        self.pages_wide * self.cell_width
    }

    /// Board height actually covered by pages.
    pub fn covered_height(&self) -> u32 {
        self.pages_tall * self.cell_height
    }

    /// Page cells in row-major order: all of row A left to right, then
    /// row B, and so on.
    pub fn cells(&self) -> Vec<PageCell> {
        let mut cells = Vec::with_capacity(self.page_count() as usize);
        for row in 0..self.pages_tall {
            for col in 0..self.pages_wide {
                cells.push(PageCell {
                    row,
                    col,
                    start_col: col * self.cell_width,
                    end_col: (col + 1) * self.cell_width,
                    start_row: row * self.cell_height,
                    end_row: (row + 1) * self.cell_height,
                });
            }
        }
        cells
    }
}

impl PageCell {
    /// Page label: row as a letter, column as a 1-based number.
    /// `A1` is the top-left page. Boards taller than 26 page rows are
    /// not supported.
    pub fn label(&self) -> String {
        debug_assert!(self.row < 26);
        let letter = (b'A' + self.row as u8) as char;
        format!("{}{}", letter, self.col + 1)
    }

    /// Cell width in pins.
    pub fn width(&self) -> u32 {
        self.end_col - self.start_col
    }

    /// Cell height in pins.
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }

    /// Pins on this page.
    pub fn pin_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}
