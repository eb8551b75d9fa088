//! Ordered target palette and nearest-colour matching.

use serde::Serialize;

use crate::error::{MosaicError, Result};

use super::Colour;

/// The six-colour palette used when none is configured.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#DBCABB", "#CCA996", "#99756E", "#58415D", "#224260", "#07090E",
];

/// An ordered, non-empty list of opaque target colours.
///
/// Order is display order and decides ties in [`Palette::nearest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Build a palette from colours, rejecting an empty list.
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        if colours.is_empty() {
            return Err(MosaicError::InvalidPalette {
                message: "palette has no colours".to_string(),
                help: Some("Supply at least one #RRGGBB colour".to_string()),
            });
        }

        // Matching only looks at RGB, so alpha is normalised away.
        let colours = colours.into_iter().map(|c| c.with_alpha(255)).collect();
        Ok(Self { colours })
    }

    /// Parse a list of `#RRGGBB` strings.
    pub fn from_hex_list<S: AsRef<str>>(hexes: &[S]) -> Result<Self> {
        let colours = hexes
            .iter()
            .map(|h| {
                Colour::from_hex(h.as_ref()).map_err(|e| MosaicError::InvalidPalette {
                    message: e.to_string(),
                    help: Some("Palette entries must be #RRGGBB".to_string()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(colours)
    }

    /// Parse a comma-separated list such as `#000000,#FFFFFF`.
    pub fn parse_list(s: &str) -> Result<Self> {
        let hexes: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect();
        Self::from_hex_list(hexes.as_slice())
    }

    /// The builtin six-colour palette.
    pub fn default_palette() -> Self {
        let colours = DEFAULT_PALETTE
            .iter()
            .filter_map(|h| Colour::from_hex(h).ok())
            .collect();
        Self { colours }
    }

    /// Find the palette entry closest to `colour` by Euclidean RGB distance.
    ///
    /// Returns the entry's index and colour. When several entries are equally
    /// close the earliest one wins.
    pub fn nearest(&self, colour: Colour) -> (usize, Colour) {
        let mut best_index = 0;
        let mut best_dist = u32::MAX;

        for (i, pc) in self.colours.iter().enumerate() {
            let dist = colour.distance_sq(*pc);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }

        (best_index, self.colours[best_index])
    }

    /// Colour at `index`.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }

    /// Number of colours (always at least one).
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Hex strings in palette order.
    pub fn to_hex_list(&self) -> Vec<String> {
        self.colours.iter().map(|c| c.to_string()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_palette()
    }
}
