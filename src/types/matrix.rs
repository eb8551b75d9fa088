//! Per-pixel grid of matched palette colours.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::{Colour, Palette};

/// One palette index per raster pixel, row-major.
///
/// Every entry points into `palette`, so no colour outside the palette can
/// appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourMatrix {
    width: u32,
    height: u32,
    indices: Vec<usize>,
    palette: Palette,
}

impl ColourMatrix {
    pub(crate) fn with_capacity(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            width,
            height,
            indices: Vec::with_capacity(width as usize * height as usize),
            palette,
        }
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index at `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Palette colour at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.index(x, y).and_then(|i| self.palette.get(i))
    }

    /// Rows of palette indices, top to bottom.
    pub fn index_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.indices.chunks_exact(self.width.max(1) as usize)
    }

    /// Rows of colours, top to bottom.
    pub fn colour_rows(&self) -> Vec<Vec<Colour>> {
        self.index_rows()
            .map(|row| row.iter().filter_map(|&i| self.palette.get(i)).collect())
            .collect()
    }

    /// Rows of `#RRGGBB` strings, top to bottom.
    pub fn hex_rows(&self) -> Vec<Vec<String>> {
        let hexes = self.palette.to_hex_list();
        self.index_rows()
            .map(|row| row.iter().map(|&i| hexes[i].clone()).collect())
            .collect()
    }

    /// How many pixels use each palette entry, in palette order.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &i in &self.indices {
            counts[i] += 1;
        }
        counts
    }

    /// One colour per block of a `count_x x count_y` grid.
    ///
    /// Each block is represented by its top-left pixel, using the same block
    /// boundaries as the averager. After recolouring a block is uniform, so
    /// this is the pattern a bead or puzzle layout needs.
    pub fn blocks(&self, count_x: u32, count_y: u32) -> Vec<Vec<Colour>> {
        let count_x = count_x.clamp(1, self.width.max(1));
        let count_y = count_y.clamp(1, self.height.max(1));

        (0..count_y)
            .map(|by| {
                let y = block_start(by, self.height, count_y);
                (0..count_x)
                    .filter_map(|bx| self.get(block_start(bx, self.width, count_x), y))
                    .collect()
            })
            .collect()
    }
}

/// First pixel of block `index` when `extent` pixels are split into `count`.
pub(crate) fn block_start(index: u32, extent: u32, count: u32) -> u32 {
    (index as u64 * extent as u64 / count as u64) as u32
}

impl Serialize for ColourMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ColourMatrix", 4)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("palette", &self.palette)?;
        s.serialize_field("rows", &self.hex_rows())?;
        s.end()
    }
}
