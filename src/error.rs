//! Error types for the watermark-overlay crate.

use std::fmt;

/// Which input image a format diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The base image being watermarked.
    Image,
    /// The watermark overlay.
    Watermark,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.write_str("image"),
            Self::Watermark => f.write_str("watermark"),
        }
    }
}

/// Errors that can occur while building or running a watermarking session.
///
/// The display form of each variant is the exact single-line diagnostic the
/// CLI prints before terminating. None of these are recoverable at the point
/// they are detected; the session stops at the first failure and no output
/// file is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input path does not point to an existing file.
    #[error("The file {0} doesn't exist.")]
    FileNotFound(String),

    /// An input image does not have exactly 3 color components.
    #[error("The number of {0} color components isn't 3.")]
    ComponentCount(ImageRole),

    /// An input image is neither 24 nor 32 bits per pixel.
    #[error("The {0} isn't 24 or 32-bit.")]
    BitDepth(ImageRole),

    /// Base and watermark differ in pixel layout despite equal dimensions.
    #[error("The image and watermark dimensions are different.")]
    DimensionMismatch,

    /// The watermark exceeds the base image in at least one dimension.
    #[error("The watermark's dimensions are larger.")]
    WatermarkTooLarge,

    /// The transparency color line is not three integers in 0-255.
    #[error("The transparency color input is invalid.")]
    InvalidTransparencyColor,

    /// The blend weight is not an integer.
    #[error("The transparency percentage isn't an integer number.")]
    WeightNotInteger,

    /// The blend weight is outside 0-100.
    #[error("The transparency percentage is out of range.")]
    WeightOutOfRange,

    /// The placement method is neither `single` nor `grid`.
    #[error("The position method input is invalid.")]
    InvalidPositionMethod,

    /// The position line is not two integers.
    #[error("The position input is invalid.")]
    InvalidPosition,

    /// The position lies outside the valid placement range.
    #[error("The position input is out of range.")]
    PositionOutOfRange,

    /// The output filename does not end in `.jpg` or `.png`.
    #[error("The output file extension isn't \"jpg\" or \"png\".")]
    OutputExtension,

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image decode or encode.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Process exit code for this failure kind.
    ///
    /// Codes group by kind so shell callers can tell failures apart:
    /// 1 I/O or codec, 2 missing file, 3 format mismatch, 4 dimension
    /// mismatch, 5 out of range, 6 parse failure, 7 invalid choice,
    /// 8 bad output extension.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Image(_) => 1,
            Self::FileNotFound(_) => 2,
            Self::ComponentCount(_) | Self::BitDepth(_) => 3,
            Self::DimensionMismatch | Self::WatermarkTooLarge => 4,
            Self::WeightOutOfRange | Self::PositionOutOfRange | Self::InvalidTransparencyColor => {
                5
            }
            Self::WeightNotInteger | Self::InvalidPosition => 6,
            Self::InvalidPositionMethod => 7,
            Self::OutputExtension => 8,
        }
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
