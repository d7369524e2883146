//! Watermark transparency resolution.
//!
//! A watermark decoded with an alpha channel can be honored as-is; one
//! without can have an alpha channel synthesized from a chroma-key color.
//! Either way the policy is decided once per run, before any blending.

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::raster::Raster;

/// How watermark transparency is derived during blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Honor the alpha channel the watermark was decoded with.
    AlphaChannel,
    /// Treat every pixel matching this RGB triple as fully transparent.
    ChromaKey([u8; 3]),
    /// Blend every watermark pixel at full opacity.
    Opaque,
}

impl Transparency {
    /// Whether blending should skip fully transparent watermark pixels.
    #[must_use]
    pub fn use_alpha(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

/// Apply the transparency policy to the watermark.
///
/// Chroma keying produces a new 32-bit buffer via [`apply_chroma_key`]; the
/// other policies return the watermark unchanged.
#[must_use]
pub fn resolve(watermark: Raster, transparency: Transparency) -> Raster {
    match transparency {
        Transparency::ChromaKey(key) => apply_chroma_key(&watermark, key),
        Transparency::AlphaChannel | Transparency::Opaque => watermark,
    }
}

/// Synthesize an alpha channel from an exact-match chroma key.
///
/// Pixels equal to `key` get alpha 0, all others alpha 255. The result is a
/// 32-bit raster regardless of the watermark's source depth.
#[must_use]
pub fn apply_chroma_key(watermark: &Raster, key: [u8; 3]) -> Raster {
    let mut pixels = RgbaImage::new(watermark.width(), watermark.height());
    for y in 0..watermark.height() {
        for x in 0..watermark.width() {
            let px = watermark.get(x, y);
            let alpha = if [px[0], px[1], px[2]] == key { 0 } else { 255 };
            pixels.put_pixel(x, y, Rgba([px[0], px[1], px[2], alpha]));
        }
    }
    Raster::from_rgba(pixels)
}

/// Parse a transparency color line: three space-separated integers 0-255.
///
/// # Errors
///
/// Returns [`Error::InvalidTransparencyColor`] for a wrong token count, a
/// non-integer token, or a component outside 0-255.
pub fn parse_color(line: &str) -> Result<[u8; 3]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::InvalidTransparencyColor);
    }
    let mut rgb = [0u8; 3];
    for (slot, token) in rgb.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<u8>()
            .map_err(|_| Error::InvalidTransparencyColor)?;
    }
    Ok(rgb)
}
