//! Pages command implementation.
//!
//! Dry-run partitioner: shows the page layout for a board size without
//! dithering or rendering anything.

use clap::Args;

use crate::error::{PushpinError, Result};
use crate::output::{plural, Printer};
use crate::page::partition;

/// Show the page layout for a board size without rendering
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Board width in pins
    pub width: u32,

    /// Board height in pins
    pub height: u32,
}

pub fn run(args: PagesArgs, printer: &Printer) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        return Err(PushpinError::Config {
            message: "Board dimensions must be at least 1x1".to_string(),
            help: None,
        });
    }

    let layout = partition(args.width, args.height);
    printer.status(
        "Partitioned",
        &format!(
            "{}x{} board into {}",
            args.width,
            args.height,
            plural(layout.page_count() as usize, "page", "pages")
        ),
    );

    for cell in layout.cells() {
        println!(
            "{}  {}x{}  {}",
            cell.label(),
            cell.width(),
            cell.height(),
            plural(cell.pin_count() as usize, "pin", "pins")
        );
    }

    let dropped_cols = args.width - layout.covered_width();
    let dropped_rows = args.height - layout.covered_height();
    if dropped_cols > 0 {
        printer.warning(
            "Warning",
            &format!(
                "{} at the right edge fall outside every page",
                plural(dropped_cols as usize, "pin column", "pin columns")
            ),
        );
    }
    if dropped_rows > 0 {
        printer.warning(
            "Warning",
            &format!(
                "{} at the bottom edge fall outside every page",
                plural(dropped_rows as usize, "pin row", "pin rows")
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_runs_for_multi_page_board() {
        let args = PagesArgs {
            width: 31,
            height: 45,
        };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_pages_rejects_zero_dimension() {
        let args = PagesArgs {
            width: 0,
            height: 45,
        };
        assert!(run(args, &Printer::new()).is_err());
    }
}
