//! Bead-tile preview of a block pattern.
//!
//! Each block becomes a square tile: the base colour, a dark shadow disc
//! slightly down-right, a light rim disc up-left, and the bead face on top.

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::types::Colour;

use super::legend::BeadShades;
use super::png::scaled_size;

/// Tile geometry is laid out on a 78-unit square and scaled to the cell.
const UNIT: f32 = 78.0;

/// `(cx, cy, rx, ry)` in tile units.
const SHADOW: (f32, f32, f32, f32) = (42.0, 41.5, 21.0, 21.5);
const LIGHT: (f32, f32, f32, f32) = (37.5, 36.5, 21.5, 21.5);
const FACE: (f32, f32, f32, f32) = (38.5, 37.5, 21.5, 21.5);

/// Render `pattern` with one `cell x cell` bead per entry.
///
/// Fails if the finished image would be wider or taller than `u32::MAX`.
pub fn render_beads(pattern: &[Vec<Colour>], cell: u32) -> Result<RgbaImage> {
    let cell = cell.max(1);
    let rows = pattern.len() as u32;
    let cols = pattern.first().map_or(0, |r| r.len()) as u32;

    let tile_cache: Vec<Vec<BeadShades>> = pattern
        .iter()
        .map(|row| row.iter().map(|&c| BeadShades::new(c)).collect())
        .collect();

    let (width, height) = scaled_size(cols, rows, cell)?;
    let scale = UNIT / cell as f32;

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let shades = &tile_cache[(y / cell) as usize][(x / cell) as usize];
        // Sample at the pixel centre in tile units.
        let u = ((x % cell) as f32 + 0.5) * scale;
        let v = ((y % cell) as f32 + 0.5) * scale;
        Rgba(shade_at(shades, u, v).to_rgba())
    }))
}

fn shade_at(shades: &BeadShades, u: f32, v: f32) -> Colour {
    if inside(FACE, u, v) {
        shades.circle
    } else if inside(LIGHT, u, v) {
        shades.light
    } else if inside(SHADOW, u, v) {
        shades.shadow
    } else {
        shades.base
    }
}

fn inside((cx, cy, rx, ry): (f32, f32, f32, f32), u: f32, v: f32) -> bool {
    let du = (u - cx) / rx;
    let dv = (v - cy) / ry;
    du * du + dv * dv <= 1.0
}
