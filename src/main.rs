use clap::Parser;
use miette::Result;
use pushpin::cli::{Cli, Commands};
use pushpin::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => pushpin::cli::build::run(args, &printer)?,
        Commands::Init(args) => pushpin::cli::init::run(args, &printer)?,
        Commands::Pages(args) => pushpin::cli::pages::run(args, &printer)?,
        Commands::Palette(args) => pushpin::cli::palette::run(args, &printer)?,
    }

    Ok(())
}
