//! Pixel blending.
//!
//! The only pixel-level algorithm in the crate: each output channel is the
//! integer weighted average `(weight * wm + (100 - weight) * base) / 100`,
//! truncating toward zero. Blending writes directly into the base buffer, so
//! successive placements compound where footprints overlap. Output pixels
//! are always fully opaque; alpha itself is never blended.

use image::Rgba;

use crate::position::Placement;
use crate::raster::Raster;

/// Weighted average of one channel pair, truncating toward zero.
///
/// The result never exceeds 255, so the narrowing cast cannot truncate.
#[allow(clippy::cast_possible_truncation)]
fn mix(weight: u8, wm: u8, base: u8) -> u8 {
    let w = u32::from(weight);
    ((w * u32::from(wm) + (100 - w) * u32::from(base)) / 100) as u8
}

/// Blend a dimension-matched watermark over the whole frame.
///
/// Every base pixel is replaced by the weighted average of the two colors at
/// that coordinate.
pub fn blend_full(base: &mut Raster, watermark: &Raster, weight: u8) {
    for y in 0..base.height() {
        for x in 0..base.width() {
            let i = base.get(x, y);
            let w = watermark.get(x, y);
            base.put(x, y, blend_pixel(weight, w, i));
        }
    }
}

/// Blend one watermark placement into the base buffer.
///
/// The footprint is clipped to the base bounds; a footprint that reaches the
/// right or bottom edge additionally stops one pixel short of it (the last
/// base column and row stay untouched — see [`footprint_end`]). With
/// `use_alpha` set, watermark pixels carrying alpha 0 leave the base color
/// in place; partially transparent pixels blend at full weight.
pub fn blend_at(
    base: &mut Raster,
    watermark: &Raster,
    weight: u8,
    use_alpha: bool,
    at: Placement,
) {
    let x_end = footprint_end(at.x, watermark.width(), base.width());
    let y_end = footprint_end(at.y, watermark.height(), base.height());

    for y in at.y..y_end {
        for x in at.x..x_end {
            let i = base.get(x, y);
            let w = watermark.get(x - at.x, y - at.y);
            let blended = if use_alpha && w[3] == 0 {
                Rgba([i[0], i[1], i[2], 255])
            } else {
                blend_pixel(weight, w, i)
            };
            base.put(x, y, blended);
        }
    }
}

fn blend_pixel(weight: u8, wm: Rgba<u8>, base: Rgba<u8>) -> Rgba<u8> {
    Rgba([
        mix(weight, wm[0], base[0]),
        mix(weight, wm[1], base[1]),
        mix(weight, wm[2], base[2]),
        255,
    ])
}

/// Clipped footprint end along one axis.
///
/// A footprint that would reach or pass the base dimension is capped at
/// `dimension - 1`, excluding the last row or column. Interior footprints
/// end at `pos + wm_dim` exactly.
fn footprint_end(pos: u32, wm_dim: u32, base_dim: u32) -> u32 {
    if pos + wm_dim >= base_dim {
        base_dim.saturating_sub(1)
    } else {
        pos + wm_dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage};

    fn solid_rgb(w: u32, h: u32, color: [u8; 3]) -> Raster {
        let mut img = RgbImage::new(w, h);
        for px in img.pixels_mut() {
            *px = Rgb(color);
        }
        Raster::from_rgb(img)
    }

    #[test]
    fn mix_truncates_toward_zero() {
        // 50% of 255 over 0 is 127.5; integer division keeps 127.
        assert_eq!(mix(50, 255, 0), 127);
        assert_eq!(mix(33, 100, 200), 167);
        assert_eq!(mix(1, 255, 0), 2);
    }

    #[test]
    fn weight_zero_is_the_identity() {
        for value in [0u8, 1, 64, 127, 128, 254, 255] {
            assert_eq!(mix(0, 99, value), value);
        }
    }

    #[test]
    fn weight_hundred_returns_the_watermark_channel() {
        for value in [0u8, 1, 64, 127, 128, 254, 255] {
            assert_eq!(mix(100, value, 99), value);
        }
    }

    #[test]
    fn full_blend_covers_every_pixel() {
        let mut base = solid_rgb(50, 50, [255, 0, 0]);
        let wm = solid_rgb(50, 50, [0, 0, 255]);
        blend_full(&mut base, &wm, 50);
        for y in 0..50 {
            for x in 0..50 {
                assert_eq!(base.get(x, y), Rgba([127, 0, 127, 255]));
            }
        }
    }

    #[test]
    fn interior_footprints_are_not_clipped() {
        let mut base = solid_rgb(10, 10, [100, 100, 100]);
        let wm = solid_rgb(4, 4, [200, 200, 200]);
        blend_at(&mut base, &wm, 100, false, Placement { x: 2, y: 3 });

        assert_eq!(base.get(2, 3), Rgba([200, 200, 200, 255]));
        assert_eq!(base.get(5, 6), Rgba([200, 200, 200, 255]));
        // One past the footprint in each axis stays untouched.
        assert_eq!(base.get(6, 3), Rgba([100, 100, 100, 255]));
        assert_eq!(base.get(2, 7), Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn edge_footprints_exclude_the_last_row_and_column() {
        let mut base = solid_rgb(10, 10, [0, 0, 0]);
        let wm = solid_rgb(5, 5, [255, 255, 255]);
        // 5 + 5 reaches the right and bottom edges, so the footprint is
        // capped at coordinate 8 inclusive.
        blend_at(&mut base, &wm, 100, false, Placement { x: 5, y: 5 });

        assert_eq!(base.get(8, 8), Rgba([255, 255, 255, 255]));
        assert_eq!(base.get(9, 8), Rgba([0, 0, 0, 255]));
        assert_eq!(base.get(8, 9), Rgba([0, 0, 0, 255]));
        assert_eq!(base.get(9, 9), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn overshooting_grid_tiles_blend_nothing_past_the_edge() {
        let mut base = solid_rgb(10, 10, [40, 40, 40]);
        let wm = solid_rgb(5, 5, [255, 255, 255]);
        // A tile planned at the base width itself has an empty footprint.
        blend_at(&mut base, &wm, 100, false, Placement { x: 10, y: 0 });
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(base.get(x, y), Rgba([40, 40, 40, 255]));
            }
        }
    }

    #[test]
    fn alpha_zero_watermark_pixels_leave_the_base_unchanged() {
        let mut base = solid_rgb(4, 4, [10, 20, 30]);

        let mut wm_pixels = RgbaImage::new(2, 2);
        wm_pixels.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        wm_pixels.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        wm_pixels.put_pixel(0, 1, Rgba([255, 255, 255, 128]));
        wm_pixels.put_pixel(1, 1, Rgba([255, 255, 255, 0]));
        let wm = Raster::from_rgba(wm_pixels);

        blend_at(&mut base, &wm, 100, true, Placement { x: 0, y: 0 });

        assert_eq!(base.get(0, 0), Rgba([10, 20, 30, 255]));
        assert_eq!(base.get(1, 0), Rgba([255, 255, 255, 255]));
        // Partial alpha is not scaled; the pixel blends at full weight.
        assert_eq!(base.get(0, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(base.get(1, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn without_use_alpha_transparent_pixels_blend_anyway() {
        let mut base = solid_rgb(2, 2, [0, 0, 0]);
        let mut wm_pixels = RgbaImage::new(2, 2);
        for px in wm_pixels.pixels_mut() {
            *px = Rgba([200, 200, 200, 0]);
        }
        let wm = Raster::from_rgba(wm_pixels);

        blend_at(&mut base, &wm, 50, false, Placement { x: 0, y: 0 });
        assert_eq!(base.get(0, 0), Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn overlapping_placements_compound() {
        let mut base = solid_rgb(10, 10, [0, 0, 0]);
        let wm = solid_rgb(4, 4, [200, 0, 0]);
        blend_at(&mut base, &wm, 50, false, Placement { x: 0, y: 0 });
        blend_at(&mut base, &wm, 50, false, Placement { x: 0, y: 0 });
        // Second pass blends against the already-watermarked buffer.
        assert_eq!(base.get(1, 1), Rgba([150, 0, 0, 255]));
    }
}
