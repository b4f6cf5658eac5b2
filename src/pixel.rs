//! Pixel capability and the built-in packed RGBA representation.
//!
//! The search engine is generic over [`Pixel`], so callers can hand it any
//! fixed-size color type without converting their buffers first. Channel
//! accessors must be pure projections of the pixel value.

/// A fixed-size pixel exposing four 8-bit channels and value equality.
pub trait Pixel: Copy + PartialEq {
    /// Red channel.
    fn r(&self) -> u8;
    /// Green channel.
    fn g(&self) -> u8;
    /// Blue channel.
    fn b(&self) -> u8;
    /// Alpha channel. Zero marks a wildcard when the pixel belongs to a needle.
    fn a(&self) -> u8;

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    fn channels(&self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Returns true when the pixel is fully transparent.
    #[inline]
    fn is_transparent(&self) -> bool {
        self.a() == 0
    }
}

/// Packed 32-bit RGBA pixel with R in the lowest byte and A in the highest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgba32(u32);

impl Rgba32 {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba32 = Rgba32(0);

    /// Packs four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Wraps a packed value (`0xAABBGGRR`).
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    /// Returns the packed value (`0xAABBGGRR`).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<[u8; 4]> for Rgba32 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl Pixel for Rgba32 {
    #[inline]
    fn r(&self) -> u8 {
        self.0 as u8
    }

    #[inline]
    fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    fn b(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    fn a(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl Pixel for [u8; 4] {
    #[inline]
    fn r(&self) -> u8 {
        self[0]
    }

    #[inline]
    fn g(&self) -> u8 {
        self[1]
    }

    #[inline]
    fn b(&self) -> u8 {
        self[2]
    }

    #[inline]
    fn a(&self) -> u8 {
        self[3]
    }
}

#[cfg(feature = "image-io")]
impl Pixel for image::Rgba<u8> {
    #[inline]
    fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    fn a(&self) -> u8 {
        self.0[3]
    }
}
