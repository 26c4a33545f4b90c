//! Pixel sampling
//!
//! Reads decoded 8-bit pixel buffers and yields one opaque [`Argb`] per
//! pixel. The sampler borrows the buffer and streams over it.

use std::fmt;

use crate::color::Argb;

/// Byte layout of a decoded pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 3 bytes per pixel: R, G, B.
    Rgb,
    /// 4 bytes per pixel: R, G, B, A. Alpha is ignored.
    Rgba,
}

impl PixelLayout {
    /// Bytes per pixel.
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// Error when a pixel buffer does not match its declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer length is not a multiple of the pixel stride.
    StrideMismatch { len: usize, stride: usize },
    /// Pixel count differs from `width * height`.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::StrideMismatch { len, stride } => {
                write!(
                    f,
                    "buffer of {} bytes is not a whole number of {}-byte pixels",
                    len, stride
                )
            }
            DecodeError::DimensionMismatch { expected, actual } => {
                write!(f, "expected {} pixels, buffer holds {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Validated view over a decoded pixel buffer.
///
/// # Example
///
/// ```
/// use hct_scheme::sample::{PixelLayout, PixelSampler};
/// use hct_scheme::Argb;
///
/// let bytes = [255, 0, 0, 128, 0, 0, 255, 255];
/// let sampler = PixelSampler::new(&bytes, 2, 1, PixelLayout::Rgba).unwrap();
/// let samples: Vec<Argb> = sampler.samples().collect();
/// assert_eq!(samples, vec![Argb::new(0xffff0000), Argb::new(0xff0000ff)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelSampler<'a> {
    bytes: &'a [u8],
    layout: PixelLayout,
}

impl<'a> PixelSampler<'a> {
    /// Check `bytes` against `width`, `height` and `layout`.
    pub fn new(
        bytes: &'a [u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<Self, DecodeError> {
        let stride = layout.stride();
        if bytes.len() % stride != 0 {
            return Err(DecodeError::StrideMismatch {
                len: bytes.len(),
                stride,
            });
        }
        let actual = bytes.len() / stride;
        let expected = width.saturating_mul(height);
        if actual != expected {
            return Err(DecodeError::DimensionMismatch { expected, actual });
        }
        Ok(Self { bytes, layout })
    }

    /// One opaque color per pixel, row-major.
    pub fn samples(&self) -> impl Iterator<Item = Argb> + 'a {
        self.bytes
            .chunks_exact(self.layout.stride())
            .map(|px| Argb::from_rgb(px[0], px[1], px[2]))
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.layout.stride()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }
}
