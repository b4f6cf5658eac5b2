//! Color-distance kernels.
//!
//! The metric is the squared Euclidean distance between two pixels treated
//! as `(r, g, b, a)` float vectors. Skipping the square root keeps the hot
//! loop cheap; tolerance thresholds are squared to match.

use crate::pixel::Pixel;

/// Kernel trait for per-pixel distance evaluation.
pub trait DistanceKernel {
    /// Returns the squared RGBA distance between `a` and `b`.
    fn difference<P: Pixel>(a: &P, b: &P) -> f32;
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

pub use scalar::ScalarKernel;

#[cfg(feature = "simd")]
pub use simd::SimdKernel;

/// Kernel used by the search engine for the enabled feature set.
#[cfg(feature = "simd")]
pub type DefaultKernel = SimdKernel;

/// Kernel used by the search engine for the enabled feature set.
#[cfg(not(feature = "simd"))]
pub type DefaultKernel = ScalarKernel;

/// Squared RGBA distance using the default kernel.
#[inline]
pub fn difference<P: Pixel>(a: &P, b: &P) -> f32 {
    DefaultKernel::difference(a, b)
}
