//! The interactive prompt session.
//!
//! Prompts are issued in a fixed order and each answer is validated the
//! moment it is read; the first invalid answer aborts the session with the
//! error whose display form is the final diagnostic line. The session is
//! generic over its input and output streams so tests can drive it from
//! in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{Error, ImageRole, Result};
use crate::pipeline::{self, RunConfig};
use crate::position::{self, Method, PlacementMode};
use crate::raster::Raster;
use crate::transparency::{self, Transparency};
use crate::validate::{self, RunMode};
use crate::writer;

/// Drive the full prompt session over the given streams, then run the
/// pipeline and report the created file.
///
/// # Errors
///
/// The first failed validation, or an I/O error on the streams themselves.
pub fn run_session<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let base = prompt_image(input, out, "Input the image filename:", ImageRole::Image)?;
    let watermark = prompt_image(
        input,
        out,
        "Input the watermark image filename:",
        ImageRole::Watermark,
    )?;

    let mode = validate::compatibility(&base, &watermark)?;

    let transparency = match mode {
        RunMode::Exact => Transparency::Opaque,
        RunMode::Positioned => prompt_transparency(input, out, &watermark)?,
    };

    let weight = prompt_weight(input, out)?;

    let placement = match mode {
        RunMode::Exact => PlacementMode::Exact,
        RunMode::Positioned => prompt_placement(input, out, &base, &watermark)?,
    };

    writeln!(out, "Input the output image filename (jpg or png extension):")?;
    let output = read_line(input)?;
    let format = writer::parse_output_filename(&output)?;

    let config = RunConfig {
        transparency,
        weight,
        placement,
        output,
        format,
    };
    pipeline::run(base, watermark, &config)?;
    writeln!(
        out,
        "The watermarked image {} has been created.",
        config.output
    )?;
    Ok(())
}

/// Read one answer, stripped of its line terminator only. Interior spaces
/// survive; filenames may contain them.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn answered_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn prompt_image<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    role: ImageRole,
) -> Result<Raster> {
    writeln!(out, "{prompt}")?;
    let name = read_line(input)?;
    let image = Raster::open(&name)?;
    validate::check_format(&image, role)?;
    Ok(image)
}

fn prompt_transparency<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    watermark: &Raster,
) -> Result<Transparency> {
    if watermark.meta().has_alpha {
        writeln!(out, "Do you want to use the watermark's Alpha channel?")?;
        if answered_yes(&read_line(input)?) {
            return Ok(Transparency::AlphaChannel);
        }
        return Ok(Transparency::Opaque);
    }

    writeln!(out, "Do you want to set a transparency color?")?;
    if answered_yes(&read_line(input)?) {
        writeln!(out, "Input a transparency color ([Red] [Green] [Blue]):")?;
        let color = transparency::parse_color(&read_line(input)?)?;
        return Ok(Transparency::ChromaKey(color));
    }
    Ok(Transparency::Opaque)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn prompt_weight<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<u8> {
    writeln!(
        out,
        "Input the watermark transparency percentage (Integer 0-100):"
    )?;
    let weight: i32 = read_line(input)?
        .trim()
        .parse()
        .map_err(|_| Error::WeightNotInteger)?;
    if !(0..=100).contains(&weight) {
        return Err(Error::WeightOutOfRange);
    }
    Ok(weight as u8)
}

fn prompt_placement<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    base: &Raster,
    watermark: &Raster,
) -> Result<PlacementMode> {
    writeln!(out, "Choose the position method (single, grid):")?;
    match position::parse_method(&read_line(input)?)? {
        Method::Grid => Ok(PlacementMode::Grid),
        Method::Single => {
            writeln!(out, "Input the watermark position ([x] [y]):")?;
            let at = position::parse_single(
                &read_line(input)?,
                base.width(),
                base.height(),
                watermark.width(),
                watermark.height(),
            )?;
            Ok(PlacementMode::Single(at))
        }
    }
}
