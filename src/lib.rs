//! pixelfind locates a small RGBA pattern (the needle) inside a larger pixel
//! buffer (the haystack).
//!
//! Matching tolerates per-pixel color drift, a bounded fraction of wrong
//! pixels, and transparent needle pixels that act as wildcards. The scan can
//! be restricted to a clip rectangle and always reports the first match in
//! row-major order. Optional features add row parallelism (`rayon`), a SIMD
//! distance kernel (`simd`), image loading (`image-io`) and instrumentation
//! (`tracing`).
//!
//! ```
//! use pixelfind::{find_pixels, MatchLocation, PixelBuffer, Rgba32, SearchOptions};
//!
//! let white = Rgba32::new(255, 255, 255, 255);
//! let red = Rgba32::new(255, 0, 0, 255);
//! let mut hay = vec![white; 16];
//! hay[2 + 4] = red;
//! let haystack = PixelBuffer::new(&hay, 4, 4).unwrap();
//! let needle_px = [red];
//! let needle = PixelBuffer::new(&needle_px, 1, 1).unwrap();
//!
//! let found = find_pixels(needle, haystack, SearchOptions::default(), None).unwrap();
//! assert_eq!(found, Some(MatchLocation { x: 2, y: 1 }));
//! ```

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod pixel;
pub mod search;
mod trace;
pub mod util;

pub use crate::image::{OwnedPixels, PixelBuffer};
pub use pixel::{Pixel, Rgba32};
pub use search::{
    find_all_pixels, find_pixels, ClipRegion, MatchLocation, Matcher, MatcherConfig,
    SearchOptions,
};
pub use util::{PixelFindError, PixelFindResult};

#[cfg(feature = "rayon")]
pub use search::{find_all_pixels_par, find_pixels_par};

#[cfg(feature = "image-io")]
pub use crate::image::io;
