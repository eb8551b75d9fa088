//! Palette recolouring.

use crate::types::{Colour, ColourMatrix, Palette, Raster};

/// Replace every pixel's RGB with its nearest palette colour.
///
/// Alpha is kept. Returns the recoloured raster together with a matrix that
/// has one palette index per pixel in row-major order.
pub fn recolor(mut raster: Raster, palette: &Palette) -> (Raster, ColourMatrix) {
    let mut matrix =
        ColourMatrix::with_capacity(raster.width(), raster.height(), palette.clone());

    // Averaged rasters repeat the same colour across a block, so remember the
    // last lookup.
    let mut last: Option<([u8; 3], usize, Colour)> = None;

    for px in raster.as_bytes_mut().chunks_exact_mut(4) {
        let rgb = [px[0], px[1], px[2]];

        let (index, matched) = match last {
            Some((prev, index, matched)) if prev == rgb => (index, matched),
            _ => {
                let (index, matched) = palette.nearest(Colour::rgb(rgb[0], rgb[1], rgb[2]));
                last = Some((rgb, index, matched));
                (index, matched)
            }
        };

        px[..3].copy_from_slice(&[matched.r, matched.g, matched.b]);
        matrix.push(index);
    }

    (raster, matrix)
}
