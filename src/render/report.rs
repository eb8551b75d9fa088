//! JSON report of a finished mosaic.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{MosaicError, Result};
use crate::pixelate::Mosaic;
use crate::types::{Colour, ColourMatrix};

use super::legend::Legend;

/// Everything a pattern or puzzle builder needs, in one document.
#[derive(Debug, Serialize)]
pub struct MosaicReport<'a> {
    pub grid: GridSize,
    pub legend: Legend,
    /// One colour per block, `grid.y` rows of `grid.x` entries.
    pub pattern: Vec<Vec<Colour>>,
    /// One colour per output pixel.
    pub matrix: &'a ColourMatrix,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
}

impl<'a> MosaicReport<'a> {
    pub fn new(mosaic: &'a Mosaic) -> Self {
        let grid = mosaic.grid();
        Self {
            grid: GridSize {
                x: grid.count_x,
                y: grid.count_y,
            },
            legend: Legend::for_mosaic(mosaic),
            pattern: mosaic.block_pattern(),
            matrix: mosaic.matrix(),
        }
    }
}

/// Write the mosaic report as pretty-printed JSON.
pub fn write_report_json(mosaic: &Mosaic, path: &Path) -> Result<()> {
    let report = MosaicReport::new(mosaic);
    let json = serde_json::to_string_pretty(&report).map_err(|e| MosaicError::Build {
        message: format!("Failed to serialize colour matrix: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| MosaicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write colour matrix: {}", e),
    })?;
    Ok(())
}
