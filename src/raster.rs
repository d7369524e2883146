//! Decoded image buffers.
//!
//! [`Raster`] holds a decoded image as a uniform RGBA pixel grid together
//! with the color layout the decoder reported (component count, bits per
//! pixel, alpha presence). All pixel math in this crate goes through the
//! `get`/`put` API here, keeping the blend algorithm independent of the
//! codec layer.

use std::path::Path;

use image::{ColorType, DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Color layout of a decoded image, as reported by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMeta {
    /// Total channel count, alpha included.
    pub components: u8,
    /// Color channel count, alpha excluded.
    pub color_components: u8,
    /// Bits per pixel across all channels.
    pub bits_per_pixel: u16,
    /// Whether the source carried an alpha channel.
    pub has_alpha: bool,
}

impl ColorMeta {
    fn from_color_type(color: ColorType) -> Self {
        let components = color.channel_count();
        let has_alpha = color.has_alpha();
        Self {
            components,
            color_components: if has_alpha {
                components - 1
            } else {
                components
            },
            bits_per_pixel: u16::from(color.bytes_per_pixel()) * 8,
            has_alpha,
        }
    }
}

/// A decoded image held as an RGBA grid plus its source color layout.
///
/// Pixels from 24-bit sources read back with alpha 255. The grid is mutated
/// in place when the raster serves as the blend output buffer.
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: RgbaImage,
    meta: ColorMeta,
}

impl Raster {
    /// Decode the image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the path does not exist, or
    /// [`Error::Image`] if decoding fails.
    pub fn open(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(Error::FileNotFound(path.to_string()));
        }
        let decoded = image::open(path)?;
        Ok(Self::from_decoded(&decoded))
    }

    /// Wrap an already-decoded image, capturing its color layout.
    #[must_use]
    pub fn from_decoded(decoded: &DynamicImage) -> Self {
        Self {
            meta: ColorMeta::from_color_type(decoded.color()),
            pixels: decoded.to_rgba8(),
        }
    }

    /// Build a raster from a raw RGBA buffer (32-bit layout).
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            meta: ColorMeta::from_color_type(ColorType::Rgba8),
        }
    }

    /// Build a raster from a raw RGB buffer (24-bit layout, alpha reads 255).
    #[must_use]
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self {
            pixels: DynamicImage::ImageRgb8(pixels).to_rgba8(),
            meta: ColorMeta::from_color_type(ColorType::Rgb8),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color layout captured at decode time.
    #[must_use]
    pub fn meta(&self) -> ColorMeta {
        self.meta
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn put(&mut self, x: u32, y: u32, pixel: Rgba<u8>) {
        self.pixels.put_pixel(x, y, pixel);
    }

    /// Borrow the underlying RGBA grid.
    #[must_use]
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Copy of the pixel grid with the alpha byte dropped.
    #[must_use]
    pub fn to_rgb(&self) -> RgbImage {
        DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8()
    }

    /// Human-readable metadata listing for the `info` subcommand.
    #[must_use]
    pub fn describe(&self, name: &str) -> String {
        let transparency = if self.meta.has_alpha {
            "TRANSLUCENT"
        } else {
            "OPAQUE"
        };
        format!(
            "Image file: {name}\n\
             Width: {}\n\
             Height: {}\n\
             Number of components: {}\n\
             Number of color components: {}\n\
             Bits per pixel: {}\n\
             Transparency: {transparency}",
            self.width(),
            self.height(),
            self.meta.components,
            self.meta.color_components,
            self.meta.bits_per_pixel,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_for_rgb_sources_is_24_bit_opaque() {
        let raster = Raster::from_rgb(RgbImage::new(4, 2));
        let meta = raster.meta();
        assert_eq!(meta.components, 3);
        assert_eq!(meta.color_components, 3);
        assert_eq!(meta.bits_per_pixel, 24);
        assert!(!meta.has_alpha);
    }

    #[test]
    fn meta_for_rgba_sources_is_32_bit_translucent() {
        let raster = Raster::from_rgba(RgbaImage::new(4, 2));
        let meta = raster.meta();
        assert_eq!(meta.components, 4);
        assert_eq!(meta.color_components, 3);
        assert_eq!(meta.bits_per_pixel, 32);
        assert!(meta.has_alpha);
    }

    #[test]
    fn meta_for_grayscale_sources_has_one_color_component() {
        let decoded = DynamicImage::ImageLuma8(image::GrayImage::new(4, 2));
        let meta = Raster::from_decoded(&decoded).meta();
        assert_eq!(meta.components, 1);
        assert_eq!(meta.color_components, 1);
        assert_eq!(meta.bits_per_pixel, 8);
    }

    #[test]
    fn rgb_pixels_read_back_with_alpha_255() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(1, 0, image::Rgb([10, 20, 30]));
        let raster = Raster::from_rgb(rgb);
        assert_eq!(raster.get(1, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn put_overwrites_a_single_pixel() {
        let mut raster = Raster::from_rgba(RgbaImage::new(3, 3));
        raster.put(2, 1, Rgba([1, 2, 3, 255]));
        assert_eq!(raster.get(2, 1), Rgba([1, 2, 3, 255]));
        assert_eq!(raster.get(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn describe_lists_decoder_metadata() {
        let raster = Raster::from_rgba(RgbaImage::new(640, 480));
        let info = raster.describe("logo.png");
        assert_eq!(
            info,
            "Image file: logo.png\n\
             Width: 640\n\
             Height: 480\n\
             Number of components: 4\n\
             Number of color components: 3\n\
             Bits per pixel: 32\n\
             Transparency: TRANSLUCENT"
        );
    }
}
