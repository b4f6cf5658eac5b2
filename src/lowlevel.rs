//! Low-level building blocks for custom search loops.
//!
//! These expose the per-window comparator, the derived thresholds and the
//! distance kernels behind [`find_pixels`](crate::find_pixels). Most users
//! should prefer the top-level functions or [`Matcher`](crate::Matcher).

pub use crate::kernel::{difference, DefaultKernel, DistanceKernel, ScalarKernel};
pub use crate::search::{matches_at, Thresholds};

#[cfg(feature = "simd")]
pub use crate::kernel::SimdKernel;
