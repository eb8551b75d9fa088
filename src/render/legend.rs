//! Palette legend with usage counts and bead shades.

use serde::Serialize;

use crate::pixelate::Mosaic;
use crate::types::{Colour, Palette};

/// Brightness offsets for the three bead highlights.
const CIRCLE_SHIFT: i32 = 18;
const LIGHT_SHIFT: i32 = 75;
const SHADOW_SHIFT: i32 = -49;

/// Shades used to draw one bead tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeadShades {
    pub base: Colour,
    pub circle: Colour,
    pub light: Colour,
    pub shadow: Colour,
}

impl BeadShades {
    pub fn new(base: Colour) -> Self {
        Self {
            base,
            circle: base.adjust_brightness(CIRCLE_SHIFT),
            light: base.adjust_brightness(LIGHT_SHIFT),
            shadow: base.adjust_brightness(SHADOW_SHIFT),
        }
    }
}

/// One palette colour in the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub index: usize,
    pub colour: Colour,
    /// Pixels of the mosaic raster using this colour.
    pub pixels: usize,
    /// Blocks of the pattern using this colour.
    pub blocks: usize,
    /// Black or white, whichever reads better on `colour`.
    pub label: Colour,
    pub shades: BeadShades,
}

/// All palette colours in palette order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Legend for a palette with no usage counts.
    pub fn for_palette(palette: &Palette) -> Self {
        let entries = palette
            .iter()
            .enumerate()
            .map(|(index, &colour)| entry(index, colour, 0, 0))
            .collect();
        Self { entries }
    }

    /// Legend for a finished mosaic.
    pub fn for_mosaic(mosaic: &Mosaic) -> Self {
        let matrix = mosaic.matrix();
        let palette = matrix.palette();
        let pixels = matrix.counts();

        let mut blocks = vec![0; palette.len()];
        for colour in mosaic.block_pattern().iter().flatten() {
            // Pattern colours always come from the palette.
            if let Some(i) = palette.iter().position(|c| c == colour) {
                blocks[i] += 1;
            }
        }

        let entries = palette
            .iter()
            .enumerate()
            .map(|(index, &colour)| entry(index, colour, pixels[index], blocks[index]))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Entries that actually appear in the mosaic.
    pub fn used(&self) -> impl Iterator<Item = &LegendEntry> {
        self.entries.iter().filter(|e| e.pixels > 0)
    }
}

fn entry(index: usize, colour: Colour, pixels: usize, blocks: usize) -> LegendEntry {
    let label = if colour.lightness() > 0.5 {
        Colour::BLACK
    } else {
        Colour::WHITE
    };

    LegendEntry {
        index,
        colour,
        pixels,
        blocks,
        label,
        shades: BeadShades::new(colour),
    }
}
