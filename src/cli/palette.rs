//! Palette command implementation.
//!
//! Lists the active palette with the bead shades derived from each colour.

use std::path::PathBuf;

use clap::Args;

use crate::config::MosaicConfig;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::{Legend, LegendEntry};
use crate::types::Palette;

/// Show a palette with its bead shades
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Comma-separated palette to show instead of the configured one
    #[arg(long)]
    pub palette: Option<String>,

    /// Config file (default: ./mosaic.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = match &args.palette {
        Some(list) => Palette::parse_list(list)?,
        None => {
            let cwd = std::env::current_dir()?;
            MosaicConfig::discover(args.config.as_deref(), &cwd)?.palette()?
        }
    };

    let legend = Legend::for_palette(&palette);
    printer.status("Palette", &plural(palette.len(), "colour", "colours"));

    for entry in legend.entries() {
        let c = entry.colour;
        println!("{}{}", printer.swatch(c.r, c.g, c.b), format_entry(entry));
    }

    Ok(())
}

/// One stdout line: index, colour, and its shades.
fn format_entry(entry: &LegendEntry) -> String {
    format!(
        "{:>2} {}  circle {}  light {}  shadow {}",
        entry.index + 1,
        entry.colour,
        entry.shades.circle,
        entry.shades.light,
        entry.shades.shadow
    )
}
