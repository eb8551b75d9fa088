//! Colour type and hex conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{MosaicError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#RRGGBB` colour string.
    ///
    /// The leading `#` is optional and digits are case-insensitive. Anything
    /// other than exactly six hex digits is rejected; palette colours carry no
    /// alpha and have no short form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(MosaicError::Parse {
                message: format!("Invalid hex colour: {:?}", s),
                help: Some("Use #RRGGBB format, e.g. #DBCABB".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Add `amount` to each of R, G and B, clamping to `0..=255`.
    ///
    /// Alpha is left unchanged.
    pub fn adjust_brightness(self, amount: i32) -> Self {
        let shift = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b), self.a)
    }

    /// Squared Euclidean distance between the RGB parts of two colours.
    ///
    /// Ordering by this value is the same as ordering by the true distance,
    /// and it stays exact in integers.
    pub fn distance_sq(self, other: Colour) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// HSL lightness in `0.0..=1.0`.
    pub fn lightness(self) -> f32 {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let hsl: Hsl = rgb.into_color();
        hsl.lightness
    }

    /// Convert to an RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl FromStr for Colour {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Always `#RRGGBB` in uppercase; alpha is not part of the hex form.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| MosaicError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
