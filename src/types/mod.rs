//! Core domain types for mosaic.
//!
//! This module contains the values that flow through the pipeline:
//! - `Colour` - RGBA colour values and hex conversion
//! - `Palette` - Ordered target colours with nearest-colour lookup
//! - `Raster` - Owned RGBA pixel buffer
//! - `ColourMatrix` - Per-pixel palette indices produced by recolouring
//! - `CropRect` - Source region to rasterize

mod colour;
mod crop;
mod matrix;
mod palette;
mod raster;

pub use colour::Colour;
pub use crop::CropRect;
pub use matrix::ColourMatrix;
pub(crate) use matrix::block_start;
pub use palette::{Palette, DEFAULT_PALETTE};
pub use raster::Raster;
