//! Init command implementation.
//!
//! Generates a starter `pushpin.yaml` board configuration.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::CONFIG_FILENAME;
use crate::error::{PushpinError, Result};
use crate::output::{display_path, Printer};

/// Generate a starter pushpin.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory for the new config (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing pushpin.yaml
    #[arg(long)]
    pub force: bool,
}

const STARTER_CONFIG: &str = "\
# Target number of pins on the finished board
pins: 2000

# Pin colours as hex strings, in palette order
colours:
  - \"#000000\"
  - \"#FFFFFF\"
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(PushpinError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&config_path, STARTER_CONFIG).map_err(|e| PushpinError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}
