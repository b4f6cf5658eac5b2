//! SIMD kernel using the `wide` crate.
//!
//! The four channels map onto the four lanes of an `f32x4`, so one pixel
//! pair is a single subtract, multiply and horizontal add.

use crate::kernel::DistanceKernel;
use crate::pixel::Pixel;
use wide::f32x4;

/// Load four u8 channels and convert to f32x4.
#[inline]
fn load_channels(px: [u8; 4]) -> f32x4 {
    f32x4::from([px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32])
}

/// Horizontal sum of f32x4.
#[inline]
fn hsum(v: f32x4) -> f32 {
    let arr = v.to_array();
    arr[0] + arr[1] + arr[2] + arr[3]
}

/// SIMD-accelerated squared distance.
pub struct SimdKernel;

impl DistanceKernel for SimdKernel {
    #[inline]
    fn difference<P: Pixel>(a: &P, b: &P) -> f32 {
        let diff = load_channels(a.channels()) - load_channels(b.channels());
        hsum(diff * diff)
    }
}
