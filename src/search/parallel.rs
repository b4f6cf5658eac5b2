//! Rayon-parallel scan (feature-gated).
//!
//! Candidate rows are distributed across threads. `find_map_first` keeps the
//! lowest row that produced a match, and each row is scanned left to right,
//! so the result is identical to the sequential scan.

use crate::image::PixelBuffer;
use crate::pixel::Pixel;
use crate::search::window::matches_at;
use crate::search::{MatchLocation, ScanPlan};
use rayon::prelude::*;

/// Row-parallel first-match scan.
pub(crate) fn scan_first_par<P: Pixel + Sync>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    plan: &ScanPlan,
) -> Option<MatchLocation> {
    let (xs, ys) = plan.ranges()?;
    let thresholds = plan.thresholds;
    ys.into_par_iter().find_map_first(|y| {
        xs.clone()
            .find(|&x| matches_at(needle, haystack, x, y, thresholds))
            .map(|x| MatchLocation { x, y })
    })
}

/// Row-parallel scan collecting every match in row-major order.
pub(crate) fn scan_all_par<P: Pixel + Sync>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    plan: &ScanPlan,
) -> Vec<MatchLocation> {
    let Some((xs, ys)) = plan.ranges() else {
        return Vec::new();
    };
    let thresholds = plan.thresholds;
    let row_results: Vec<Vec<MatchLocation>> = ys
        .into_par_iter()
        .map(|y| {
            xs.clone()
                .filter(|&x| matches_at(needle, haystack, x, y, thresholds))
                .map(|x| MatchLocation { x, y })
                .collect()
        })
        .collect();
    row_results.into_iter().flatten().collect()
}
