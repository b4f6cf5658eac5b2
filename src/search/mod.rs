//! Sliding-window search for a needle inside a haystack.
//!
//! Placements are visited row-major: `x` varies fastest, `y` slowest, and
//! the first matching placement wins. Geometry is validated before any
//! window is compared, and "not found" is reported as `Ok(None)`.

use std::ops::RangeInclusive;

use crate::image::PixelBuffer;
use crate::pixel::Pixel;
use crate::trace::{scan_event, search_span};
use crate::util::{PixelFindError, PixelFindResult};

#[cfg(feature = "rayon")]
mod parallel;
mod scan;
pub(crate) mod window;

pub use window::{matches_at, Thresholds};

/// Tolerance configuration. Both values are clamped into `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchOptions {
    pixel_tolerance: f32,
    image_tolerance: f32,
}

impl SearchOptions {
    /// Creates options, clamping each tolerance into `[0, 1]` (NaN becomes 0).
    pub fn new(pixel_tolerance: f32, image_tolerance: f32) -> Self {
        Self {
            pixel_tolerance: clamp_unit(pixel_tolerance),
            image_tolerance: clamp_unit(image_tolerance),
        }
    }

    /// Returns a copy with a new per-pixel tolerance.
    pub fn with_pixel_tolerance(self, pixel_tolerance: f32) -> Self {
        Self::new(pixel_tolerance, self.image_tolerance)
    }

    /// Returns a copy with a new whole-needle tolerance.
    pub fn with_image_tolerance(self, image_tolerance: f32) -> Self {
        Self::new(self.pixel_tolerance, image_tolerance)
    }

    /// Maximum per-pixel color distance as a fraction of one full channel step.
    pub fn pixel_tolerance(&self) -> f32 {
        self.pixel_tolerance
    }

    /// Fraction of needle pixels allowed to fail the per-pixel test.
    pub fn image_tolerance(&self) -> f32 {
        self.image_tolerance
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Sub-rectangle of the haystack that bounds the placement scan.
///
/// A placement `(x, y)` is a candidate when the whole needle fits inside the
/// clip with its top-left corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl ClipRegion {
    /// Creates a clip rectangle.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip covering the whole haystack.
    pub fn full<P>(haystack: &PixelBuffer<'_, P>) -> Self {
        Self::new(0, 0, haystack.width(), haystack.height())
    }
}

/// Top-left corner of a matching window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchLocation {
    pub x: usize,
    pub y: usize,
}

/// Validated search: thresholds plus the candidate placement ranges.
#[derive(Clone, Debug)]
pub(crate) struct ScanPlan {
    pub(crate) thresholds: Thresholds,
    xs: RangeInclusive<usize>,
    ys: RangeInclusive<usize>,
    empty: bool,
}

impl ScanPlan {
    fn new<P>(
        needle: &PixelBuffer<'_, P>,
        haystack: &PixelBuffer<'_, P>,
        options: SearchOptions,
        clip: ClipRegion,
    ) -> PixelFindResult<Self> {
        validate_geometry(needle, haystack, clip)?;

        let thresholds = Thresholds::new(needle.len(), options);
        // A zero-sized needle axis still anchors its corner on a real pixel.
        let span_x = needle.width().max(1);
        let span_y = needle.height().max(1);
        let empty = clip.width < span_x || clip.height < span_y;
        let (xs, ys) = if empty {
            (1..=0, 1..=0)
        } else {
            (
                clip.x..=clip.x + (clip.width - span_x),
                clip.y..=clip.y + (clip.height - span_y),
            )
        };
        Ok(Self {
            thresholds,
            xs,
            ys,
            empty,
        })
    }

    /// Returns the `(x, y)` placement ranges, or `None` when no placement fits.
    pub(crate) fn ranges(&self) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        if self.empty {
            return None;
        }
        Some((self.xs.clone(), self.ys.clone()))
    }

    fn candidates(&self) -> usize {
        match self.ranges() {
            Some((xs, ys)) => {
                let cols = xs.end() - xs.start() + 1;
                let rows = ys.end() - ys.start() + 1;
                cols.saturating_mul(rows)
            }
            None => 0,
        }
    }
}

fn validate_geometry<P>(
    needle: &PixelBuffer<'_, P>,
    haystack: &PixelBuffer<'_, P>,
    clip: ClipRegion,
) -> PixelFindResult<()> {
    if haystack.width() < needle.width()
        || haystack.height() < needle.height()
        || haystack.len() < needle.len()
    {
        return Err(PixelFindError::NeedleLargerThanHaystack {
            needle_width: needle.width(),
            needle_height: needle.height(),
            haystack_width: haystack.width(),
            haystack_height: haystack.height(),
        });
    }

    let clip_too_large = clip
        .width
        .checked_mul(clip.height)
        .map_or(true, |area| haystack.len() < area);
    if clip_too_large {
        return Err(PixelFindError::ClipLargerThanHaystack {
            clip_width: clip.width,
            clip_height: clip.height,
            haystack_size: haystack.len(),
        });
    }

    let fits_x = clip
        .x
        .checked_add(clip.width)
        .is_some_and(|end| end <= haystack.width());
    let fits_y = clip
        .y
        .checked_add(clip.height)
        .is_some_and(|end| end <= haystack.height());
    if !fits_x || !fits_y {
        return Err(PixelFindError::ClipOutOfBounds {
            x: clip.x,
            y: clip.y,
            width: clip.width,
            height: clip.height,
            img_width: haystack.width(),
            img_height: haystack.height(),
        });
    }

    Ok(())
}

/// Finds the first placement of `needle` inside `haystack`.
///
/// `clip` defaults to the full haystack. Returns `Ok(None)` when no window
/// matches, including when the clip is narrower or shorter than the needle.
pub fn find_pixels<P: Pixel>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    options: SearchOptions,
    clip: Option<ClipRegion>,
) -> PixelFindResult<Option<MatchLocation>> {
    let clip = clip.unwrap_or_else(|| ClipRegion::full(&haystack));
    let _span = search_span!("find_pixels", needle, haystack).entered();

    let plan = ScanPlan::new(&needle, &haystack, options, clip)?;
    let found = scan::scan_first(needle, haystack, &plan);
    scan_event!(plan, found = found.is_some());
    Ok(found)
}

/// Finds every placement of `needle` inside `haystack`, in scan order.
///
/// Overlapping matches are all reported.
pub fn find_all_pixels<P: Pixel>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    options: SearchOptions,
    clip: Option<ClipRegion>,
) -> PixelFindResult<Vec<MatchLocation>> {
    let clip = clip.unwrap_or_else(|| ClipRegion::full(&haystack));
    let _span = search_span!("find_all_pixels", needle, haystack).entered();

    let plan = ScanPlan::new(&needle, &haystack, options, clip)?;
    let found = scan::scan_all(needle, haystack, &plan);
    scan_event!(plan, matches = found.len());
    Ok(found)
}

/// Row-parallel variant of [`find_pixels`] with identical results.
#[cfg(feature = "rayon")]
pub fn find_pixels_par<P: Pixel + Sync>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    options: SearchOptions,
    clip: Option<ClipRegion>,
) -> PixelFindResult<Option<MatchLocation>> {
    let clip = clip.unwrap_or_else(|| ClipRegion::full(&haystack));
    let _span = search_span!("find_pixels", needle, haystack, parallel = true).entered();

    let plan = ScanPlan::new(&needle, &haystack, options, clip)?;
    let found = parallel::scan_first_par(needle, haystack, &plan);
    scan_event!(plan, found = found.is_some());
    Ok(found)
}

/// Row-parallel variant of [`find_all_pixels`] with identical results.
#[cfg(feature = "rayon")]
pub fn find_all_pixels_par<P: Pixel + Sync>(
    needle: PixelBuffer<'_, P>,
    haystack: PixelBuffer<'_, P>,
    options: SearchOptions,
    clip: Option<ClipRegion>,
) -> PixelFindResult<Vec<MatchLocation>> {
    let clip = clip.unwrap_or_else(|| ClipRegion::full(&haystack));
    let _span = search_span!("find_all_pixels", needle, haystack, parallel = true).entered();

    let plan = ScanPlan::new(&needle, &haystack, options, clip)?;
    let found = parallel::scan_all_par(needle, haystack, &plan);
    scan_event!(plan, matches = found.len());
    Ok(found)
}

/// Configuration bundle for [`Matcher`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MatcherConfig {
    /// Tolerance settings.
    pub options: SearchOptions,
    /// Placement clip; `None` scans the whole haystack.
    pub clip: Option<ClipRegion>,
    /// Scan rows in parallel. Only honored with the `rayon` feature.
    pub parallel: bool,
}

/// Reusable search front-end holding a [`MatcherConfig`].
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatcherConfig,
}

impl Matcher {
    /// Creates a matcher with exact-match defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: MatcherConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.cfg
    }

    /// Finds the first match in scan order.
    #[cfg(not(feature = "rayon"))]
    pub fn find<P: Pixel>(
        &self,
        needle: PixelBuffer<'_, P>,
        haystack: PixelBuffer<'_, P>,
    ) -> PixelFindResult<Option<MatchLocation>> {
        find_pixels(needle, haystack, self.cfg.options, self.cfg.clip)
    }

    /// Finds every match in scan order.
    #[cfg(not(feature = "rayon"))]
    pub fn find_all<P: Pixel>(
        &self,
        needle: PixelBuffer<'_, P>,
        haystack: PixelBuffer<'_, P>,
    ) -> PixelFindResult<Vec<MatchLocation>> {
        find_all_pixels(needle, haystack, self.cfg.options, self.cfg.clip)
    }

    /// Finds the first match in scan order, scanning rows in parallel when
    /// configured.
    #[cfg(feature = "rayon")]
    pub fn find<P: Pixel + Sync>(
        &self,
        needle: PixelBuffer<'_, P>,
        haystack: PixelBuffer<'_, P>,
    ) -> PixelFindResult<Option<MatchLocation>> {
        if self.cfg.parallel {
            find_pixels_par(needle, haystack, self.cfg.options, self.cfg.clip)
        } else {
            find_pixels(needle, haystack, self.cfg.options, self.cfg.clip)
        }
    }

    /// Finds every match in scan order, scanning rows in parallel when
    /// configured.
    #[cfg(feature = "rayon")]
    pub fn find_all<P: Pixel + Sync>(
        &self,
        needle: PixelBuffer<'_, P>,
        haystack: PixelBuffer<'_, P>,
    ) -> PixelFindResult<Vec<MatchLocation>> {
        if self.cfg.parallel {
            find_all_pixels_par(needle, haystack, self.cfg.options, self.cfg.clip)
        } else {
            find_all_pixels(needle, haystack, self.cfg.options, self.cfg.clip)
        }
    }
}
