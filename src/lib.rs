//! Overlay a watermark image onto a base image with weighted blending.
//!
//! The crate implements a single forward pipeline: decode both images,
//! validate their pixel formats, resolve watermark transparency (existing
//! alpha channel, synthesized chroma-key alpha, or none), plan one or many
//! placements, blend each placement into the base buffer with an integer
//! weighted average, and encode the result as JPEG or PNG.
//!
//! # Quick Start
//!
//! ```no_run
//! use watermark_overlay::{compose, OutputFormat, PlacementMode, Raster, RunConfig, Transparency};
//!
//! let base = Raster::open("photo.png").unwrap();
//! let watermark = Raster::open("logo.png").unwrap();
//! let config = RunConfig {
//!     transparency: Transparency::Opaque,
//!     weight: 20,
//!     placement: PlacementMode::Grid,
//!     output: "marked.png".to_string(),
//!     format: OutputFormat::Png,
//! };
//! let marked = compose(base, watermark, &config);
//! marked.as_rgba().save("marked.png").unwrap();
//! ```
//!
//! # Interactive Session
//!
//! The CLI drives [`session::run_session`], a fixed sequence of prompts that
//! validates each answer as it is read and stops at the first invalid one.
//! The session is generic over its streams, so it can be tested (or
//! embedded) without a terminal.

#![deny(missing_docs)]

pub mod blending;
pub mod error;
pub mod pipeline;
pub mod position;
pub mod raster;
pub mod session;
pub mod transparency;
pub mod validate;
pub mod writer;

pub use error::{Error, ImageRole, Result};
pub use pipeline::{compose, run, RunConfig};
pub use position::{Placement, PlacementMode};
pub use raster::{ColorMeta, Raster};
pub use transparency::Transparency;
pub use validate::RunMode;
pub use writer::OutputFormat;
