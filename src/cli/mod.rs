pub mod completions;
pub mod convert;
pub mod init;
pub mod palette;

use std::fmt;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::MosaicError;

/// mosaic - Turn photos into palette-limited pixel mosaics
#[derive(Parser, Debug)]
#[command(name = "mosaic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and machine-readable output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image into a mosaic and colour matrix
    Convert(convert::ConvertArgs),

    /// Show a palette with its bead shades
    Palette(palette::PaletteArgs),

    /// Write a default mosaic.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// A `WIDTHxHEIGHT` pair, or a single number for a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub x: u32,
    pub y: u32,
}

impl FromStr for Dims {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MosaicError::Parse {
            message: format!("Invalid size: {}", s),
            help: Some("Use WIDTHxHEIGHT or a single number, e.g. 128x128 or 64".to_string()),
        };

        let s = s.trim();
        let (x, y) = match s.split_once(|c: char| c == 'x' || c == 'X') {
            Some((x, y)) => (x.trim(), y.trim()),
            None => (s, s),
        };

        Ok(Self {
            x: x.parse().map_err(|_| invalid())?,
            y: y.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
