//! Build command implementation.
//!
//! Runs the full pipeline: load the source image, resize it to the
//! target pin count, dither it against the configured palette, and
//! write the board PNG plus the paginated assembly PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use image::imageops::FilterType;

use crate::census::colour_census;
use crate::config::{BoardConfig, CONFIG_FILENAME};
use crate::dither::dither;
use crate::error::{PushpinError, Result};
use crate::output::{display_path, plural, Printer};
use crate::page::{paginate, Document, PageOptions};
use crate::render::{write_pdf, write_png};
use crate::types::Raster;

/// Turn an image into a board and printable assembly pages
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source image to turn into a board
    #[arg(required = true)]
    pub image: PathBuf,

    /// Board configuration file
    #[arg(long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Target number of pins (overrides the config file)
    #[arg(long)]
    pub pins: Option<u32>,

    /// Pin colour as a hex string, repeatable (overrides the config file)
    #[arg(long = "colour")]
    pub colours: Vec<String>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Scale factor for the board PNG (pixels per pin)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args, printer)?;
    config.require_dither_palette()?;

    let img = image::open(&args.image)
        .map_err(|e| PushpinError::Io {
            path: args.image.clone(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgb8();

    // Resize so the board holds roughly the configured number of pins.
    let (target_w, target_h) = pin_dimensions(img.width(), img.height(), config.pins);
    let img = if (target_w, target_h) != (img.width(), img.height()) {
        printer.status(
            "Resizing",
            &format!(
                "{}x{} image to {}x{} pins",
                img.width(),
                img.height(),
                target_w,
                target_h
            ),
        );
        image::imageops::resize(&img, target_w, target_h, FilterType::CatmullRom)
    } else {
        img
    };
    let source = Raster::from_image(&img);

    printer.status(
        "Dithering",
        &format!(
            "{}x{} board ({})",
            source.width(),
            source.height(),
            plural(config.palette.len(), "colour", "colours")
        ),
    );
    let board = dither(&source, &config.palette);

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| PushpinError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let stem = args
        .image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("board");

    let png_path = args.output.join(format!("{}.png", stem));
    write_png(&board, &png_path, args.scale)?;
    println!("  {} -> {}", stem, display_path(&png_path));

    let document = paginate(&board, &PageOptions::default());
    let pdf_path = args.output.join(format!("{}.pdf", stem));
    write_pdf(&document, &pdf_path)?;
    println!("  {} -> {}", stem, display_path(&pdf_path));

    report(&document, &board, printer);

    printer.success(
        "Finished",
        &format!(
            "{} across {}",
            plural(board.pixel_count() as usize, "pin", "pins"),
            plural(document.pages.len(), "page", "pages")
        ),
    );

    Ok(())
}

/// Merge the config file with command-line overrides.
///
/// Flags win over the file; the file is optional when both `--pins`
/// and `--colour` are given.
fn resolve_config(args: &BuildArgs, printer: &Printer) -> Result<BoardConfig> {
    let base = if args.config.exists() {
        Some(BoardConfig::load(&args.config, printer)?)
    } else {
        None
    };

    let pins = match (args.pins, &base) {
        (Some(pins), _) => pins,
        (None, Some(config)) => config.pins,
        (None, None) => {
            return Err(PushpinError::Config {
                message: format!("No {} found and no --pins given", CONFIG_FILENAME),
                help: Some("Run `pushpin init` to create one, or pass --pins and --colour".to_string()),
            })
        }
    };

    if !args.colours.is_empty() {
        return BoardConfig::from_parts(pins, &args.colours, printer);
    }

    match base {
        Some(config) => Ok(BoardConfig {
            pins,
            palette: config.palette,
        }),
        None => Err(PushpinError::Config {
            message: "No palette colours given".to_string(),
            help: Some(format!("Add colours to {} or pass --colour", CONFIG_FILENAME)),
        }),
    }
}

/// Board dimensions holding roughly `pins` pins at the image's aspect
/// ratio. Both axes are clamped to at least one pin.
fn pin_dimensions(width: u32, height: u32, pins: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let new_w = ((pins as f64 * aspect).sqrt().floor() as u32).max(1);
    let new_h = ((pins as f64 / new_w as f64).floor() as u32).max(1);
    (new_w, new_h)
}

/// Print the page layout and the pins-per-colour shopping list.
fn report(document: &Document, board: &Raster, printer: &Printer) {
    let layout = &document.layout;
    printer.info(
        "Pages",
        &format!(
            "{} wide x {} tall ({} each)",
            layout.pages_wide,
            layout.pages_tall,
            plural((layout.cell_width * layout.cell_height) as usize, "pin", "pins")
        ),
    );

    let dropped_cols = board.width() - layout.covered_width();
    let dropped_rows = board.height() - layout.covered_height();
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

    for (colour, count) in colour_census(board) {
        println!("{} {}", colour, plural(count as usize, "pin", "pins"));
    }
}
