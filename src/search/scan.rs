//! Sequential scan over candidate placements.

use crate::image::PixelBuffer;
use crate::pixel::Pixel;
use crate::search::window::matches_at;
use crate::search::{MatchLocation, ScanPlan};

/// Returns the first matching placement in row-major order.
pub(crate) fn scan_first<P: Pixel>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    plan: &ScanPlan,
) -> Option<MatchLocation> {
    let (xs, ys) = plan.ranges()?;
    for y in ys {
        for x in xs.clone() {
            if matches_at(needle, haystack, x, y, plan.thresholds) {
                return Some(MatchLocation { x, y });
            }
        }
    }
    None
}

/// Returns every matching placement in row-major order.
pub(crate) fn scan_all<P: Pixel>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    plan: &ScanPlan,
) -> Vec<MatchLocation> {
    let Some((xs, ys)) = plan.ranges() else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for y in ys {
        for x in xs.clone() {
            if matches_at(needle, haystack, x, y, plan.thresholds) {
                out.push(MatchLocation { x, y });
            }
        }
    }
    out
}
