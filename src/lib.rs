//! mosaic - Photo to palette mosaic converter
//!
//! A library for turning a (cropped) photo into a grid of large pixels, each
//! snapped to the nearest colour of a small palette, plus the colour matrix
//! needed to build a bead, cross-stitch, or puzzle pattern from it.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pixelate;
pub mod render;
pub mod types;

pub use config::{MosaicConfig, CONFIG_FILENAME};
pub use error::{MosaicError, Result};
pub use pixelate::{
    average_blocks, crop_image, decode_image, load_image, recolor, Draw, Grid, Mosaic, Pipeline,
    PipelineConfig, ResizeDraw,
};
pub use render::{
    encode_png, png_data_url, render_beads, scale_raster, write_png, write_report_json,
    BeadShades, Legend, LegendEntry, MosaicReport,
};
pub use types::{Colour, ColourMatrix, CropRect, Palette, Raster, DEFAULT_PALETTE};
