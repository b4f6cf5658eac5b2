//! Error types for pixelfind.

use thiserror::Error;

/// Result alias for pixelfind operations.
pub type PixelFindResult<T> = std::result::Result<T, PixelFindError>;

/// Errors that can occur when building buffers or running a search.
///
/// Every variant is raised before any scanning starts. A search that finds
/// nothing is not an error; it returns `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PixelFindError {
    /// The backing slice length does not equal `width * height`.
    #[error("buffer of {len} pixels does not match {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// The haystack is smaller than the needle in width, height or pixel count.
    #[error(
        "haystack {haystack_width}x{haystack_height} must be at least as large as needle {needle_width}x{needle_height}"
    )]
    NeedleLargerThanHaystack {
        needle_width: usize,
        needle_height: usize,
        haystack_width: usize,
        haystack_height: usize,
    },
    /// The haystack holds fewer pixels than the clip rectangle covers.
    #[error("haystack of {haystack_size} pixels cannot be smaller than the {clip_width}x{clip_height} clip")]
    ClipLargerThanHaystack {
        clip_width: usize,
        clip_height: usize,
        haystack_size: usize,
    },
    /// The clip rectangle extends past the haystack edges.
    #[error("clip ({x}, {y}, {width}x{height}) is outside the {img_width}x{img_height} haystack")]
    ClipOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Image loading or decoding failed.
    #[error("image I/O error: {reason}")]
    ImageIo { reason: String },
}

impl PixelFindError {
    /// Returns true for errors describing incompatible search geometry.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            Self::NeedleLargerThanHaystack { .. }
                | Self::ClipLargerThanHaystack { .. }
                | Self::ClipOutOfBounds { .. }
        )
    }
}
