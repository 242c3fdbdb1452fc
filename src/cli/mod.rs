pub mod build;
pub mod init;
pub mod pages;
pub mod palette;

use clap::{Parser, Subcommand};

/// pushpin - Push-pin board generator
#[derive(Parser, Debug)]
#[command(name = "pushpin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn an image into a board and printable assembly pages
    Build(build::BuildArgs),

    /// Generate a starter pushpin.yaml
    Init(init::InitArgs),

    /// Show the page layout for a board size without rendering
    Pages(pages::PagesArgs),

    /// Count pins per colour in an existing board image
    Palette(palette::PaletteArgs),
}
