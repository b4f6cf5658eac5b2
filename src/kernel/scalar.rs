//! Scalar reference kernel.

use crate::kernel::DistanceKernel;
use crate::pixel::Pixel;

/// Channel-by-channel squared distance.
pub struct ScalarKernel;

impl DistanceKernel for ScalarKernel {
    #[inline]
    fn difference<P: Pixel>(a: &P, b: &P) -> f32 {
        let a = a.channels();
        let b = b.channels();
        let mut sum = 0.0f32;
        for (&ca, &cb) in a.iter().zip(b.iter()) {
            let diff = ca as f32 - cb as f32;
            sum += diff * diff;
        }
        sum
    }
}
