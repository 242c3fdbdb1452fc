use std::path::PathBuf;

use clap::Args;

use crate::census::colour_census;
use crate::error::{PushpinError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Raster;

/// Count pins per colour in an existing board image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Board PNG to count
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to list
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let img = image::open(&args.file)
        .map_err(|e| PushpinError::Io {
            path: args.file.clone(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let board = Raster::from_image(&img);
    let mut census = colour_census(&board);
    if let Some(max) = args.max {
        census.truncate(max);
    }

    printer.status(
        "Counted",
        &format!(
            "{} in {}",
            plural(census.len(), "colour", "colours"),
            display_path(&args.file)
        ),
    );

    // Shopping-list lines to stdout, most common colour first.
    for (colour, count) in &census {
        println!("{} {}", colour, plural(*count as usize, "pin", "pins"));
    }

    Ok(())
}
