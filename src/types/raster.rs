//! Owned RGBA pixel buffer.

use image::RgbaImage;

use crate::error::{MosaicError, Result};

use super::Colour;

/// A `width x height` RGBA buffer, four bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// A raster filled with one colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        let count = width as usize * height as usize;
        let data = colour.to_rgba().repeat(count);
        Self { width, height, data }
    }

    /// Wrap raw RGBA bytes, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MosaicError::Build {
                message: format!(
                    "raster buffer is {} bytes, expected {} for {}x{}",
                    data.len(),
                    expected,
                    width,
                    height
                ),
                help: None,
            });
        }
        Ok(Self { width, height, data })
    }

    /// Build a raster from a grid of colour rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Colour>]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for row in rows {
            if row.len() as u32 != width {
                return Err(MosaicError::Build {
                    message: "raster rows differ in length".to_string(),
                    help: None,
                });
            }
            for colour in row {
                data.extend_from_slice(&colour.to_rgba());
            }
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Colour at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        Colour::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Overwrite the pixel at `(x, y)`, including alpha.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&colour.to_rgba());
    }

    /// Colour rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Colour>> {
        self.data
            .chunks_exact(self.width.max(1) as usize * 4)
            .map(|row| {
                row.chunks_exact(4)
                    .map(|p| Colour::new(p[0], p[1], p[2], p[3]))
                    .collect()
            })
            .collect()
    }

    pub fn into_image(self) -> RgbaImage {
        // Length is checked on construction, so this cannot fail.
        RgbaImage::from_raw(self.width, self.height, self.data)
            .unwrap_or_else(|| RgbaImage::new(0, 0))
    }
}

impl From<RgbaImage> for Raster {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
