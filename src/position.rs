//! Placement planning.
//!
//! A watermark lands either at one user-chosen offset or tiled across the
//! base image from the origin in watermark-sized steps.

use crate::error::{Error, Result};

/// Top-left offset of one watermark application on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Horizontal offset in pixels.
    pub x: u32,
    /// Vertical offset in pixels.
    pub y: u32,
}

/// Where the watermark lands on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// One whole-frame application of a dimension-matched watermark.
    Exact,
    /// One application at a user-chosen offset.
    Single(Placement),
    /// Automatic tiling from the origin.
    Grid,
}

/// Placement-method choice, before coordinates are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Explicit `x y` offset.
    Single,
    /// Automatic tiling.
    Grid,
}

/// Parse a placement-method answer: `single` or `grid`.
///
/// # Errors
///
/// Returns [`Error::InvalidPositionMethod`] for anything else.
pub fn parse_method(line: &str) -> Result<Method> {
    match line.trim() {
        "single" => Ok(Method::Single),
        "grid" => Ok(Method::Grid),
        _ => Err(Error::InvalidPositionMethod),
    }
}

/// Parse and bounds-check a single-position answer.
///
/// # Errors
///
/// Returns [`Error::InvalidPosition`] unless the line is exactly two integer
/// tokens, then [`Error::PositionOutOfRange`] unless the offset satisfies
/// `0 <= x <= base_w - wm_w` and likewise for y.
pub fn parse_single(line: &str, base_w: u32, base_h: u32, wm_w: u32, wm_h: u32) -> Result<Placement> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(Error::InvalidPosition);
    }
    let x: i64 = tokens[0].parse().map_err(|_| Error::InvalidPosition)?;
    let y: i64 = tokens[1].parse().map_err(|_| Error::InvalidPosition)?;
    single(x, y, base_w, base_h, wm_w, wm_h)
}

/// Bounds-check an explicit offset against the valid placement range.
///
/// # Errors
///
/// Returns [`Error::PositionOutOfRange`] when the watermark footprint would
/// start outside `[0, base - wm]` in either axis.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn single(x: i64, y: i64, base_w: u32, base_h: u32, wm_w: u32, wm_h: u32) -> Result<Placement> {
    let max_x = i64::from(base_w) - i64::from(wm_w);
    let max_y = i64::from(base_h) - i64::from(wm_h);
    if x < 0 || y < 0 || x > max_x || y > max_y {
        return Err(Error::PositionOutOfRange);
    }
    Ok(Placement {
        x: x as u32,
        y: y as u32,
    })
}

/// Generate the tiled placement sequence.
///
/// Tiles advance from the origin in watermark-sized steps, deliberately one
/// tile past the edge in each axis; overshooting tiles are clipped at blend
/// time. The sequence is x-major: all rows for the first column, then the
/// next column.
#[must_use]
pub fn grid(base_w: u32, base_h: u32, wm_w: u32, wm_h: u32) -> Vec<Placement> {
    let cols = base_w / wm_w + 1;
    let rows = base_h / wm_h + 1;
    let mut placements = Vec::with_capacity((cols * rows) as usize);
    for ix in 0..cols {
        for iy in 0..rows {
            placements.push(Placement {
                x: ix * wm_w,
                y: iy * wm_h,
            });
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parsing_is_exact() {
        assert_eq!(parse_method("single").unwrap(), Method::Single);
        assert_eq!(parse_method(" grid\n").unwrap(), Method::Grid);
        for line in ["Single", "tiled", "", "single grid"] {
            assert!(matches!(
                parse_method(line),
                Err(Error::InvalidPositionMethod)
            ));
        }
    }

    #[test]
    fn single_accepts_the_full_valid_range() {
        assert_eq!(
            parse_single("0 0", 100, 80, 30, 20).unwrap(),
            Placement { x: 0, y: 0 }
        );
        assert_eq!(
            parse_single("70 60", 100, 80, 30, 20).unwrap(),
            Placement { x: 70, y: 60 }
        );
    }

    #[test]
    fn single_rejects_out_of_range_offsets() {
        for line in ["-1 0", "0 -1", "71 0", "0 61"] {
            assert!(
                matches!(
                    parse_single(line, 100, 80, 30, 20),
                    Err(Error::PositionOutOfRange)
                ),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn single_rejects_malformed_lines() {
        for line in ["10", "1 2 3", "a b", "", "10,20"] {
            assert!(
                matches!(parse_single(line, 100, 80, 30, 20), Err(Error::InvalidPosition)),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn grid_overshoots_by_one_tile_per_axis() {
        let placements = grid(100, 100, 30, 30);
        assert_eq!(placements.len(), 16);
        assert_eq!(placements.first(), Some(&Placement { x: 0, y: 0 }));
        assert_eq!(placements.last(), Some(&Placement { x: 90, y: 90 }));
    }

    #[test]
    fn grid_is_ordered_x_major() {
        let placements = grid(60, 60, 30, 30);
        let expected = [
            Placement { x: 0, y: 0 },
            Placement { x: 0, y: 30 },
            Placement { x: 0, y: 60 },
            Placement { x: 30, y: 0 },
            Placement { x: 30, y: 30 },
            Placement { x: 30, y: 60 },
            Placement { x: 60, y: 0 },
            Placement { x: 60, y: 30 },
            Placement { x: 60, y: 60 },
        ];
        assert_eq!(placements, expected);
    }

    #[test]
    fn grid_covers_non_divisible_dimensions() {
        // 100/40 -> 2 full steps, +1 overshoot tile: columns at 0, 40, 80.
        let placements = grid(100, 40, 40, 40);
        assert_eq!(placements.len(), 3 * 2);
        assert!(placements.contains(&Placement { x: 80, y: 40 }));
    }
}
