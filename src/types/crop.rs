//! Crop rectangle in source-image pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};

/// A sub-region `(x, y, width, height)` of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Largest square centred in a `width x height` image.
    pub fn centred_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self::new((width - side) / 2, (height - side) / 2, side, side)
    }

    /// Check that the rectangle is non-empty and inside the image.
    pub fn validate(&self, image_width: u32, image_height: u32) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MosaicError::InvalidCrop {
                message: format!("{} has no area", self),
                help: None,
            });
        }

        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > image_width as u64 || bottom > image_height as u64 {
            return Err(MosaicError::InvalidCrop {
                message: format!(
                    "{} extends past the {}x{} image",
                    self, image_width, image_height
                ),
                help: Some("Keep x+width and y+height within the image".to_string()),
            });
        }

        Ok(())
    }
}

impl FromStr for CropRect {
    type Err = MosaicError;

    /// Parse `X,Y,W,H`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let invalid = || MosaicError::Parse {
            message: format!("Invalid crop rectangle: {}", s),
            help: Some("Use X,Y,WIDTH,HEIGHT, e.g. 10,20,300,300".to_string()),
        };

        if parts.len() != 4 {
            return Err(invalid());
        }

        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let crop: CropRect = "10, 20,300,301".parse().unwrap();
        assert_eq!(crop, CropRect::new(10, 20, 300, 301));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("1,2,3".parse::<CropRect>().is_err());
        assert!("1,2,3,x".parse::<CropRect>().is_err());
        assert!("-1,2,3,4".parse::<CropRect>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(CropRect::new(0, 0, 10, 10).validate(10, 10).is_ok());
        assert!(matches!(
            CropRect::new(1, 0, 10, 10).validate(10, 10),
            Err(MosaicError::InvalidCrop { .. })
        ));
        assert!(matches!(
            CropRect::new(0, 0, 0, 10).validate(10, 10),
            Err(MosaicError::InvalidCrop { .. })
        ));
    }

    #[test]
    fn test_centred_square() {
        assert_eq!(CropRect::centred_square(400, 300), CropRect::new(50, 0, 300, 300));
        assert_eq!(CropRect::centred_square(20, 30), CropRect::new(0, 5, 20, 20));
    }
}
