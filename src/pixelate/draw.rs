//! Drawing a source image onto the fixed working canvas.

use image::imageops::{self, FilterType};
use image::DynamicImage;

use crate::error::Result;
use crate::types::Raster;

/// Scale an image onto a `width x height` raster.
///
/// The pipeline only talks to this trait, so any deterministic resampler can
/// be plugged in.
pub trait Draw {
    fn draw(&self, image: &DynamicImage, width: u32, height: u32) -> Result<Raster>;
}

/// Resampling with the image crate's `resize`.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDraw {
    pub filter: FilterType,
}

impl ResizeDraw {
    pub const fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Bilinear resampling.
    pub const fn bilinear() -> Self {
        Self::new(FilterType::Triangle)
    }

    /// Nearest-neighbour resampling.
    pub const fn nearest() -> Self {
        Self::new(FilterType::Nearest)
    }
}

impl Default for ResizeDraw {
    fn default() -> Self {
        Self::bilinear()
    }
}

impl Draw for ResizeDraw {
    fn draw(&self, image: &DynamicImage, width: u32, height: u32) -> Result<Raster> {
        let rgba = image.to_rgba8();
        if rgba.dimensions() == (width, height) {
            return Ok(Raster::from(rgba));
        }
        Ok(Raster::from(imageops::resize(&rgba, width, height, self.filter)))
    }
}
