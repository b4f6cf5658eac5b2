//! Per-window comparison with pixel and image tolerance.

use crate::image::PixelBuffer;
use crate::kernel::difference;
use crate::pixel::Pixel;
use crate::search::SearchOptions;

/// Integer thresholds derived once per search from [`SearchOptions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Number of mismatching needle pixels a window may contain.
    ///
    /// Signed because every wildcard needle pixel decrements it during a
    /// window comparison.
    pub max_invalid_pixels: i64,
    /// Squared per-pixel distance threshold, `floor(pixel_tolerance * 255)^2`.
    pub tolerance_squared: f32,
}

impl Thresholds {
    /// Derives thresholds for a needle of `needle_len` pixels.
    ///
    /// Both tolerances are truncated, never rounded. Both products are taken
    /// in `f32`, the precision the tolerances are stored in, so decimal
    /// fractions such as `7 / 10` yield `7` rather than `6`.
    pub fn new(needle_len: usize, options: SearchOptions) -> Self {
        let max_invalid_pixels = (needle_len as f32 * options.image_tolerance()).floor() as i64;
        let steps = (options.pixel_tolerance() * 255.0).floor();
        Self {
            max_invalid_pixels,
            tolerance_squared: steps * steps,
        }
    }
}

/// Returns true when `needle` matches `haystack` with its top-left corner at
/// `(offset_x, offset_y)`.
///
/// Needle pixels with zero alpha are wildcards. Each one is skipped and also
/// shrinks the mismatch budget by one for the rest of the window, so a needle
/// dominated by wildcards leaves little or no room for mismatches among its
/// opaque pixels. A mismatch found once the running count has reached the
/// budget rejects the window immediately.
///
/// Placements that do not fit inside the haystack never match.
pub fn matches_at<P: Pixel>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    offset_x: usize,
    offset_y: usize,
    thresholds: Thresholds,
) -> bool {
    let needle_width = needle.width();
    let needle_height = needle.height();
    let end_x = match offset_x.checked_add(needle_width) {
        Some(end) if end <= haystack.width() => end,
        _ => return false,
    };
    match offset_y.checked_add(needle_height) {
        Some(end) if end <= haystack.height() => {}
        _ => return false,
    }

    let tolerance = thresholds.tolerance_squared;
    let mut budget = thresholds.max_invalid_pixels;
    let mut invalid = 0i64;

    for y in 0..needle_height {
        let (Some(needle_row), Some(hay_row)) = (needle.row(y), haystack.row(offset_y + y)) else {
            return false;
        };
        let hay_row = &hay_row[offset_x..end_x];
        for (needle_px, hay_px) in needle_row.iter().zip(hay_row) {
            if needle_px.is_transparent() {
                budget -= 1;
                continue;
            }
            if needle_px == hay_px || (tolerance > 0.0 && difference(needle_px, hay_px) <= tolerance)
            {
                continue;
            }
            if invalid >= budget {
                return false;
            }
            invalid += 1;
        }
    }

    true
}
