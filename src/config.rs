//! Board configuration.
//!
//! The pipeline takes its palette and target pin count from a single
//! validated value object, built once at the CLI boundary from a YAML
//! file, command-line flags, or both.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PushpinError, Result};
use crate::output::Printer;
use crate::types::{Colour, Palette};

/// Default config file name.
pub const CONFIG_FILENAME: &str = "pushpin.yaml";

/// On-disk config format.
#[derive(Debug, Deserialize)]
struct RawConfig {
    /// Target number of pins on the finished board.
    pins: u32,
    /// Pin colours as hex strings, in palette order.
    colours: Vec<String>,
}

/// Validated board configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub pins: u32,
    pub palette: Palette,
}

impl BoardConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path, printer: &Printer) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| PushpinError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let raw: RawConfig = serde_yaml::from_str(&source).map_err(|e| PushpinError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Expected fields: pins (integer), colours (list of hex strings)".to_string()),
        })?;

        Self::from_parts(raw.pins, &raw.colours, printer)
    }

    /// Build a validated config from raw values.
    ///
    /// A colour string that fails to parse is replaced by black with a
    /// warning; a bad colour never aborts the run.
    pub fn from_parts(pins: u32, colours: &[impl AsRef<str>], printer: &Printer) -> Result<Self> {
        if pins == 0 {
            return Err(PushpinError::Config {
                message: "Pin count must be at least 1".to_string(),
                help: Some("Set pins to the number of pins the board should hold".to_string()),
            });
        }

        let resolved: Vec<Colour> = colours
            .iter()
            .map(|s| {
                let s = s.as_ref();
                match Colour::from_hex(s) {
                    Ok(c) => c,
                    Err(_) => {
                        printer.warning(
                            "Warning",
                            &format!("Invalid colour format: {}; using black", s),
                        );
                        Colour::BLACK
                    }
                }
            })
            .collect();

        let palette = Palette::new(resolved)?;
        Ok(Self { pins, palette })
    }

    /// Dithering needs at least two colours to mean anything.
    pub fn require_dither_palette(&self) -> Result<()> {
        if self.palette.len() < 2 {
            return Err(PushpinError::Config {
                message: format!(
                    "Palette has {} colour(s); dithering needs at least 2",
                    self.palette.len()
                ),
                help: Some("Add more colours to the palette".to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "pins: 2000\ncolours:\n  - \"#000000\"\n  - \"#FFFFFF\"\n  - \"#FF004D\"\n",
        )
        .unwrap();

        let config = BoardConfig::load(&path, &Printer::new()).unwrap();
        assert_eq!(config.pins, 2000);
        assert_eq!(config.palette.len(), 3);
        assert!(config.palette.contains(Colour::rgb(255, 0, 77)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(BoardConfig::load(&path, &Printer::new()).is_err());
    }

    #[test]
    fn test_load_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "pins: [not an integer\n").unwrap();
        assert!(BoardConfig::load(&path, &Printer::new()).is_err());
    }

    #[test]
    fn test_malformed_colour_falls_back_to_black() {
        let config =
            BoardConfig::from_parts(100, &["#FFFFFF", "not-a-colour"], &Printer::new()).unwrap();
        assert_eq!(config.palette.len(), 2);
        let colours: Vec<Colour> = config.palette.iter().copied().collect();
        assert_eq!(colours, vec![Colour::WHITE, Colour::BLACK]);
    }

    #[test]
    fn test_zero_pins_rejected() {
        let result = BoardConfig::from_parts(0, &["#000000", "#FFFFFF"], &Printer::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let empty: [&str; 0] = [];
        assert!(BoardConfig::from_parts(100, &empty, &Printer::new()).is_err());
    }

    #[test]
    fn test_require_dither_palette() {
        let one = BoardConfig::from_parts(100, &["#000000"], &Printer::new()).unwrap();
        assert!(one.require_dither_palette().is_err());

        let two = BoardConfig::from_parts(100, &["#000000", "#FFFFFF"], &Printer::new()).unwrap();
        assert!(two.require_dither_palette().is_ok());
    }
}
