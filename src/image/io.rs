//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::OwnedPixels;
use crate::pixel::Rgba32;
use crate::util::{PixelFindError, PixelFindResult};
use std::path::Path;

/// Creates an owned packed buffer from an RGBA image.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> PixelFindResult<OwnedPixels<Rgba32>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .as_raw()
        .chunks_exact(4)
        .map(|px| Rgba32::new(px[0], px[1], px[2], px[3]))
        .collect();
    OwnedPixels::new(data, width, height)
}

/// Creates an owned packed buffer from a dynamic image of any color type.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> PixelFindResult<OwnedPixels<Rgba32>> {
    let rgba = img.to_rgba8();
    owned_from_rgba_image(&rgba)
}

/// Loads an image from disk and converts it to packed RGBA pixels.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> PixelFindResult<OwnedPixels<Rgba32>> {
    let img = image::open(path).map_err(|err| PixelFindError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

#[cfg(test)]
mod tests {
    use super::owned_from_rgba_image;
    use crate::pixel::{Pixel, Rgba32};

    #[test]
    fn rgba_image_converts_channel_order() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, image::Rgba([5, 6, 7, 0]));

        let owned = owned_from_rgba_image(&img).unwrap();
        assert_eq!(owned.width(), 2);
        assert_eq!(owned.height(), 1);
        assert_eq!(owned.data()[0], Rgba32::new(1, 2, 3, 4));
        assert!(owned.data()[1].is_transparent());
    }
}
