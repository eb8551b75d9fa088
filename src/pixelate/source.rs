//! Loading and cropping source images.

use std::path::Path;

use image::DynamicImage;

use crate::error::{MosaicError, Result};
use crate::types::CropRect;

/// Open and decode an image file.
///
/// A file that cannot be opened, recognised, or decoded is a decode error.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decode_error = |reason: String| MosaicError::Decode {
        message: format!("{}: {}", path.display(), reason),
    };

    image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}

/// Decode an image from an in-memory buffer.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| MosaicError::Decode {
        message: e.to_string(),
    })
}

/// Cut `crop` out of `image`, leaving the source untouched.
pub fn crop_image(image: &DynamicImage, crop: CropRect) -> Result<DynamicImage> {
    crop.validate(image.width(), image.height())?;
    Ok(image.crop_imm(crop.x, crop.y, crop.width, crop.height))
}
