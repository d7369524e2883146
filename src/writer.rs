//! Output encoding.
//!
//! The output filename is validated the moment it is read, before any
//! blending work: anything except the reserved characters `<>:;,?"*|/`,
//! followed by a `.jpg` or `.png` extension. The uppercased extension then
//! selects the encoder.

use std::fs::File;
use std::sync::OnceLock;

use image::{DynamicImage, ImageFormat};
use regex::Regex;

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Output encoding selected from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG at quality 100.
    Jpg,
    /// PNG.
    Png,
}

static FILENAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn filename_pattern() -> &'static Regex {
    FILENAME_PATTERN.get_or_init(|| {
        Regex::new(r#"^[^<>:;,?"*|/]+\.(?i:jpg|png)$"#).expect("filename pattern is a valid regex")
    })
}

/// Validate an output filename and select the encoder from its extension.
///
/// The extension match is case-insensitive; `OUT.PNG` is as valid as
/// `out.png`.
///
/// # Errors
///
/// Returns [`Error::OutputExtension`] when the name contains a reserved
/// character or does not end in `.jpg`/`.png`.
pub fn parse_output_filename(name: &str) -> Result<OutputFormat> {
    if !filename_pattern().is_match(name) {
        return Err(Error::OutputExtension);
    }
    match name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_uppercase()
        .as_str()
    {
        "JPG" => Ok(OutputFormat::Jpg),
        "PNG" => Ok(OutputFormat::Png),
        _ => Err(Error::OutputExtension),
    }
}

/// Encode the blended buffer to `path`.
///
/// JPEG output drops the alpha byte entirely; PNG output keeps a 32-bit
/// buffer only when the base image was 32-bit. Every alpha value is 255 by
/// the time this runs, so the choice affects layout, not appearance.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created, or [`Error::Image`]
/// if encoding fails.
pub fn save(raster: &Raster, path: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jpg => {
            let file = File::create(path)?;
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 100);
            encoder.encode_image(&DynamicImage::ImageRgb8(raster.to_rgb()))?;
        }
        OutputFormat::Png => {
            let img = if raster.meta().has_alpha {
                DynamicImage::ImageRgba8(raster.as_rgba().clone())
            } else {
                DynamicImage::ImageRgb8(raster.to_rgb())
            };
            img.save_with_format(path, ImageFormat::Png)?;
        }
    }
    Ok(())
}
