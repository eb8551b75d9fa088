//! The mosaic pipeline.
//!
//! A source image is drawn onto a fixed-size raster, averaged block by
//! block, and every pixel is then snapped to its nearest palette colour:
//!
//! ```text
//! load -> draw -> average_blocks -> recolor -> Mosaic
//! ```

mod average;
mod draw;
mod pipeline;
mod recolor;
mod source;

pub use average::{average_blocks, Grid};
pub use draw::{Draw, ResizeDraw};
pub use pipeline::{Mosaic, Pipeline, PipelineConfig, DEFAULT_OUTPUT_SIZE, DEFAULT_PIXEL_COUNT};
pub use recolor::recolor;
pub use source::{crop_image, decode_image, load_image};
