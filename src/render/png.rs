//! PNG output for mosaics.
//!
//! Encodes rasters to PNG files, byte buffers, or data URLs with optional
//! integer scaling.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use image::{ImageBuffer, ImageFormat, RgbaImage};

use crate::error::{MosaicError, Result};
use crate::types::Raster;

/// Scale a raster up by an integer factor.
///
/// Uses nearest-neighbour scaling so mosaic blocks stay crisp.
pub fn scale_raster(raster: &Raster, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1); // Minimum scale of 1
    let (width, height) = scaled_size(raster.width(), raster.height(), scale)?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        image::Rgba(raster.pixel(x / scale, y / scale).to_rgba())
    }))
}

/// `width x height` multiplied by `factor`, or a build error if either side
/// no longer fits in a `u32`.
pub(crate) fn scaled_size(width: u32, height: u32, factor: u32) -> Result<(u32, u32)> {
    match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(MosaicError::Build {
            message: format!("{}x{} scaled by {} is too large", width, height, factor),
            help: Some("Use a smaller scale or bead size".to_string()),
        }),
    }
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster, scale: u32) -> Result<Vec<u8>> {
    let img = scale_raster(raster, scale)?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| MosaicError::Build {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;

    Ok(buf)
}

/// Wrap PNG bytes in a `data:` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Write a raster to a PNG file.
///
/// # Arguments
///
/// * `raster` - The raster to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(raster: &Raster, path: &Path, scale: u32) -> Result<()> {
    write_image(&scale_raster(raster, scale)?, path)
}

/// Save an already built image as PNG.
pub(crate) fn write_image(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| MosaicError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    fn checker() -> Raster {
        Raster::from_rows(&[
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::WHITE, Colour::BLACK],
        ])
        .unwrap()
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&checker(), &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_scaled() {
        let raster =
            Raster::from_rows(&[vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)]]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&raster, &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let img = scale_raster(&checker(), 0).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
    }

    #[test]
    fn test_oversized_scale_is_build_error() {
        let raster = Raster::filled(300, 300, Colour::BLACK);
        assert!(matches!(
            scale_raster(&raster, 20_000_000),
            Err(MosaicError::Build { .. })
        ));
        assert!(matches!(
            encode_png(&raster, u32::MAX),
            Err(MosaicError::Build { .. })
        ));

        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");
        assert!(write_png(&raster, &path, 20_000_000).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_scaled_size() {
        assert_eq!(scaled_size(300, 200, 3).unwrap(), (900, 600));
        assert!(scaled_size(1, 5, u32::MAX).is_err());
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let bytes = encode_png(&checker(), 3).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(5, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_data_url_prefix() {
        let url = png_data_url(&[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }
}
