//! The configurable watermarking pipeline.
//!
//! One run configuration drives every variant of the tool: whole-frame
//! overlay, single placement, and tiled placement, each with or without
//! transparency handling. Control flows strictly forward — resolve
//! transparency, expand placements, blend each placement into the base
//! buffer, encode.

use crate::blending;
use crate::error::Result;
use crate::position::{self, PlacementMode};
use crate::raster::Raster;
use crate::transparency::{self, Transparency};
use crate::writer::{self, OutputFormat};

/// Everything a run needs beyond the two input images, built once from
/// validated input.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Watermark transparency policy.
    pub transparency: Transparency,
    /// Watermark contribution percentage, 0-100.
    pub weight: u8,
    /// Where the watermark lands.
    pub placement: PlacementMode,
    /// Validated output filename.
    pub output: String,
    /// Encoder selected from the output extension.
    pub format: OutputFormat,
}

/// Run the blend stages and return the finished buffer without touching
/// disk.
///
/// The base image doubles as the output buffer; for grid runs each tile
/// blends against the progressively watermarked image.
#[must_use]
pub fn compose(mut base: Raster, watermark: Raster, config: &RunConfig) -> Raster {
    let use_alpha = config.transparency.use_alpha();
    let watermark = transparency::resolve(watermark, config.transparency);

    match config.placement {
        PlacementMode::Exact => blending::blend_full(&mut base, &watermark, config.weight),
        PlacementMode::Single(at) => {
            blending::blend_at(&mut base, &watermark, config.weight, use_alpha, at);
        }
        PlacementMode::Grid => {
            let placements = position::grid(
                base.width(),
                base.height(),
                watermark.width(),
                watermark.height(),
            );
            for at in placements {
                blending::blend_at(&mut base, &watermark, config.weight, use_alpha, at);
            }
        }
    }
    base
}

/// Execute a full run: blend every placement, then encode the result to the
/// configured output file.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] or [`crate::Error::Image`] if encoding
/// fails; nothing is written until all blending has finished.
pub fn run(base: Raster, watermark: Raster, config: &RunConfig) -> Result<()> {
    let output = compose(base, watermark, config);
    writer::save(&output, &config.output, config.format)
}
