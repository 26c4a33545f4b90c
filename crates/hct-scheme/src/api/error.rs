//! Unified error type for the extraction API.
//!
//! [`ExtractError`] wraps every failure the pipeline can produce so callers
//! can propagate with `?`.

use std::fmt;

use crate::hct::GamutMappingFailure;
use crate::sample::DecodeError;

/// Unified error type for [`SchemeExtractor`](super::SchemeExtractor).
///
/// # Example
///
/// ```
/// use hct_scheme::{ExtractError, PixelLayout, SchemeExtractor};
///
/// let err = SchemeExtractor::new()
///     .extract(&[0, 0, 0, 0], 1, 1, PixelLayout::Rgb)
///     .unwrap_err();
/// assert!(matches!(err, ExtractError::Decode(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Pixel buffer does not match its declared shape.
    Decode(DecodeError),
    /// No pixels to sample.
    EmptyInput,
    /// The HCT solver found no color for a palette tone.
    GamutMapping(GamutMappingFailure),
    /// `max_colors` was zero.
    InvalidMaxColors,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Decode(err) => write!(f, "decode error: {}", err),
            ExtractError::EmptyInput => write!(f, "image has no pixels"),
            ExtractError::GamutMapping(err) => write!(f, "gamut mapping failed: {}", err),
            ExtractError::InvalidMaxColors => write!(f, "max_colors must be at least 1"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Decode(err) => Some(err),
            ExtractError::GamutMapping(err) => Some(err),
            ExtractError::EmptyInput | ExtractError::InvalidMaxColors => None,
        }
    }
}

impl From<DecodeError> for ExtractError {
    fn from(err: DecodeError) -> Self {
        ExtractError::Decode(err)
    }
}

impl From<GamutMappingFailure> for ExtractError {
    fn from(err: GamutMappingFailure) -> Self {
        ExtractError::GamutMapping(err)
    }
}
