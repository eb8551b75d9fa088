//! The load, quantize, recolour, publish sequence.

use image::DynamicImage;

use crate::error::{MosaicError, Result};
use crate::render::{encode_png, png_data_url};
use crate::types::{Colour, ColourMatrix, CropRect, Palette, Raster};

use super::average::{average_blocks, Grid};
use super::draw::{Draw, ResizeDraw};
use super::recolor::recolor;
use super::source::crop_image;

pub const DEFAULT_OUTPUT_SIZE: u32 = 300;
pub const DEFAULT_PIXEL_COUNT: u32 = 128;

/// Validated settings for one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub output_width: u32,
    pub output_height: u32,
    pub grid: Grid,
    pub palette: Palette,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_SIZE,
            output_height: DEFAULT_OUTPUT_SIZE,
            grid: Grid::square(DEFAULT_PIXEL_COUNT),
            palette: Palette::default_palette(),
        }
    }
}

impl PipelineConfig {
    /// Check the grid against the output size.
    ///
    /// The palette is already known to be non-empty by construction.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate(self.output_width, self.output_height)
    }
}

/// The published result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mosaic {
    raster: Raster,
    matrix: ColourMatrix,
    grid: Grid,
}

impl Mosaic {
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn matrix(&self) -> &ColourMatrix {
        &self.matrix
    }

    /// The block grid the mosaic was quantized with.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// One palette colour per block.
    pub fn block_pattern(&self) -> Vec<Vec<Colour>> {
        self.matrix.blocks(self.grid.count_x, self.grid.count_y)
    }

    /// PNG encoding of the recoloured raster.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.raster, 1)
    }

    /// `data:image/png;base64,...` URL of the recoloured raster.
    pub fn to_data_url(&self) -> Result<String> {
        Ok(png_data_url(&self.to_png()?))
    }

    pub fn into_parts(self) -> (Raster, ColourMatrix) {
        (self.raster, self.matrix)
    }
}

/// Turns source images into mosaics.
///
/// Holds only configuration; every run works on a fresh raster drawn from
/// the source image, so runs never see each other's pixels.
#[derive(Debug, Clone)]
pub struct Pipeline<D = ResizeDraw> {
    config: PipelineConfig,
    drawer: D,
}

impl Pipeline<ResizeDraw> {
    /// A pipeline with bilinear resampling.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_drawer(config, ResizeDraw::default())
    }
}

impl<D: Draw> Pipeline<D> {
    /// A pipeline with a custom resampler.
    pub fn with_drawer(config: PipelineConfig, drawer: D) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, drawer })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every phase on `image`, optionally cropped first.
    pub fn run(&self, image: &DynamicImage, crop: Option<CropRect>) -> Result<Mosaic> {
        let raster = self.load(image, crop)?;
        self.process(raster)
    }

    /// Crop and draw `image` onto a fresh working raster.
    pub fn load(&self, image: &DynamicImage, crop: Option<CropRect>) -> Result<Raster> {
        let raster = match crop {
            Some(crop) => {
                let cropped = crop_image(image, crop)?;
                self.draw(&cropped)?
            }
            None => self.draw(image)?,
        };
        Ok(raster)
    }

    fn draw(&self, image: &DynamicImage) -> Result<Raster> {
        let raster = self
            .drawer
            .draw(image, self.config.output_width, self.config.output_height)?;

        let expected = (self.config.output_width, self.config.output_height);
        if (raster.width(), raster.height()) != expected {
            return Err(MosaicError::Build {
                message: format!(
                    "drawer returned {}x{}, expected {}x{}",
                    raster.width(),
                    raster.height(),
                    expected.0,
                    expected.1
                ),
                help: None,
            });
        }
        Ok(raster)
    }

    /// Average and recolour an already drawn raster.
    pub fn process(&self, raster: Raster) -> Result<Mosaic> {
        let averaged = average_blocks(raster, self.config.grid)?;
        let (raster, matrix) = recolor(averaged, &self.config.palette);
        Ok(Mosaic {
            raster,
            matrix,
            grid: self.config.grid,
        })
    }
}
