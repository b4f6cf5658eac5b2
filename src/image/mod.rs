//! Pixel buffer views and owned buffers.
//!
//! `PixelBuffer` is a borrowed, row-major view over a contiguous slice of
//! pixels. It never copies or owns the data, so the borrow checker ties its
//! lifetime to the caller's storage. `OwnedPixels` is the owning companion
//! used by loaders and tests.

use crate::util::{PixelFindError, PixelFindResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed row-major pixel view with `data.len() == width * height`.
#[derive(Copy, Clone, Debug)]
pub struct PixelBuffer<'a, P> {
    data: &'a [P],
    width: usize,
    height: usize,
}

impl<'a, P> PixelBuffer<'a, P> {
    /// Creates a view, failing when the slice length is not `width * height`.
    ///
    /// Zero width or height is legal and yields an empty buffer.
    pub fn new(data: &'a [P], width: usize, height: usize) -> PixelFindResult<Self> {
        let expected = checked_len(width, height, data.len())?;
        if data.len() != expected {
            return Err(PixelFindError::SizeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total pixel count (`width * height`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing slice.
    pub fn as_slice(&self) -> &'a [P] {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [P]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }
}

/// Owned row-major pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedPixels<P> {
    data: Vec<P>,
    width: usize,
    height: usize,
}

impl<P> OwnedPixels<P> {
    /// Takes ownership of `data`, failing when its length is not `width * height`.
    pub fn new(data: Vec<P>, width: usize, height: usize) -> PixelFindResult<Self> {
        PixelBuffer::new(&data, width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Copies a borrowed view into an owned buffer.
    pub fn from_view(view: PixelBuffer<'_, P>) -> Self
    where
        P: Clone,
    {
        Self {
            data: view.as_slice().to_vec(),
            width: view.width(),
            height: view.height(),
        }
    }

    /// Returns a borrowed view of the pixels.
    pub fn view(&self) -> PixelBuffer<'_, P> {
        PixelBuffer {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel data.
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// Consumes the buffer and returns the pixel data.
    pub fn into_vec(self) -> Vec<P> {
        self.data
    }
}

fn checked_len(width: usize, height: usize, len: usize) -> PixelFindResult<usize> {
    width
        .checked_mul(height)
        .ok_or(PixelFindError::SizeMismatch { width, height, len })
}
