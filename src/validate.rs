//! Input image validation.
//!
//! Both inputs must decode to 3 color channels at 24 or 32 bits per pixel.
//! The compatibility check then decides how the pair is blended: a
//! dimension-matched watermark covers the whole frame, a smaller one is
//! placed under user direction.

use crate::error::{Error, ImageRole, Result};
use crate::raster::Raster;

/// How the watermark relates to the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Watermark and base have identical dimensions; whole-frame overlay.
    Exact,
    /// Watermark fits inside the base; user-directed placement.
    Positioned,
}

/// Check one decoded image's color layout.
///
/// # Errors
///
/// Returns [`Error::ComponentCount`] unless the image has exactly 3 color
/// channels, then [`Error::BitDepth`] unless it is 24 or 32-bit.
pub fn check_format(image: &Raster, role: ImageRole) -> Result<()> {
    let meta = image.meta();
    if meta.color_components != 3 {
        return Err(Error::ComponentCount(role));
    }
    if meta.bits_per_pixel != 24 && meta.bits_per_pixel != 32 {
        return Err(Error::BitDepth(role));
    }
    Ok(())
}

/// Determine the run mode for a format-checked image pair.
///
/// Equal dimensions select [`RunMode::Exact`], which additionally requires
/// an identical pixel layout on both sides. A watermark that fits inside the
/// base selects [`RunMode::Positioned`].
///
/// # Errors
///
/// [`Error::DimensionMismatch`] for an equal-sized pair with differing
/// layouts, [`Error::WatermarkTooLarge`] when the watermark exceeds the base
/// in either axis.
pub fn compatibility(base: &Raster, watermark: &Raster) -> Result<RunMode> {
    if base.width() == watermark.width() && base.height() == watermark.height() {
        if base.meta() == watermark.meta() {
            return Ok(RunMode::Exact);
        }
        return Err(Error::DimensionMismatch);
    }
    if watermark.width() <= base.width() && watermark.height() <= base.height() {
        return Ok(RunMode::Positioned);
    }
    Err(Error::WatermarkTooLarge)
}
