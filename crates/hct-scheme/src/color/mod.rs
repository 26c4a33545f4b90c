//! Color types and conversion utilities
//!
//! This module provides the packed [`Argb`] color used throughout the
//! pipeline, plus the fixed colorimetric transforms every other stage is
//! built on: sRGB linearization, CIE XYZ, CIE L*a*b* and L*.
//!
//! # Example
//!
//! ```
//! use hct_scheme::Argb;
//! use hct_scheme::color::lstar_from_argb;
//!
//! let gray: Argb = "#777777".parse().unwrap();
//! let tone = lstar_from_argb(gray);
//! assert!((tone - 50.0).abs() < 1.0);
//! ```

mod argb;
mod error;
mod lab;
mod lut;
pub(crate) mod math;

pub use argb::Argb;
pub use error::ParseColorError;
pub use lab::{
    argb_from_lab, argb_from_linrgb, argb_from_lstar, argb_from_xyz, lab_from_argb,
    lstar_from_argb, lstar_from_y, xyz_from_argb, y_from_lstar, WHITE_POINT_D65,
};
pub use lut::{delinearized, linearized};
pub(crate) use lut::CRITICAL_PLANES;

#[cfg(test)]
pub(crate) use lab::{SRGB_TO_XYZ, XYZ_TO_SRGB};
