//! Block averaging.
//!
//! Splits a raster into `count_x x count_y` blocks and replaces every pixel
//! of a block with the block's mean RGBA.

use crate::error::{MosaicError, Result};
use crate::types::{block_start, Raster};

/// Block counts along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub count_x: u32,
    pub count_y: u32,
}

impl Grid {
    pub const fn new(count_x: u32, count_y: u32) -> Self {
        Self { count_x, count_y }
    }

    /// A square `count x count` grid.
    pub const fn square(count: u32) -> Self {
        Self::new(count, count)
    }

    /// Reject grids that would leave blocks narrower than one pixel.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(MosaicError::DegenerateGrid {
                message: format!("raster is {}x{}", width, height),
                help: Some("Output width and height must be at least 1".to_string()),
            });
        }

        if self.count_x == 0 || self.count_y == 0 {
            return Err(MosaicError::DegenerateGrid {
                message: format!("{}x{} blocks", self.count_x, self.count_y),
                help: Some("Block counts must be at least 1".to_string()),
            });
        }

        if self.count_x > width || self.count_y > height {
            return Err(MosaicError::DegenerateGrid {
                message: format!(
                    "{}x{} blocks do not fit a {}x{} raster",
                    self.count_x, self.count_y, width, height
                ),
                help: Some("Use at most one block per pixel along each axis".to_string()),
            });
        }

        Ok(())
    }
}

/// Average each block of `raster` in place.
///
/// Block column `i` covers `floor(i * W / count_x) .. floor((i + 1) * W / count_x)`
/// and rows likewise, so blocks tile the raster with no gaps or overlap and
/// edge blocks may be one pixel smaller. Channel means use round-half-up
/// integer division.
pub fn average_blocks(mut raster: Raster, grid: Grid) -> Result<Raster> {
    let (width, height) = (raster.width(), raster.height());
    grid.validate(width, height)?;

    let stride = width as usize * 4;
    let data = raster.as_bytes_mut();

    for by in 0..grid.count_y {
        let y0 = block_start(by, height, grid.count_y) as usize;
        let y1 = block_start(by + 1, height, grid.count_y) as usize;

        for bx in 0..grid.count_x {
            let x0 = block_start(bx, width, grid.count_x) as usize;
            let x1 = block_start(bx + 1, width, grid.count_x) as usize;

            let count = ((y1 - y0) * (x1 - x0)) as u64;
            let mut sums = [0u64; 4];

            for y in y0..y1 {
                let row = &data[y * stride + x0 * 4..y * stride + x1 * 4];
                for px in row.chunks_exact(4) {
                    for (sum, &channel) in sums.iter_mut().zip(px) {
                        *sum += channel as u64;
                    }
                }
            }

            let mean = sums.map(|sum| ((sum + count / 2) / count) as u8);

            for y in y0..y1 {
                let row = &mut data[y * stride + x0 * 4..y * stride + x1 * 4];
                for px in row.chunks_exact_mut(4) {
                    px.copy_from_slice(&mean);
                }
            }
        }
    }

    Ok(raster)
}
