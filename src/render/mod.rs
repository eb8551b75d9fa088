//! Rendering module for mosaic.
//!
//! Turns finished mosaics into files: the recoloured raster as PNG or data
//! URL, a bead-tile preview, and a JSON report with the colour matrix.

mod beads;
mod legend;
mod png;
mod report;

pub use beads::render_beads;
pub use legend::{BeadShades, Legend, LegendEntry};
pub use png::{encode_png, png_data_url, scale_raster, write_png};
pub(crate) use png::write_image;
pub use report::{write_report_json, GridSize, MosaicReport};
