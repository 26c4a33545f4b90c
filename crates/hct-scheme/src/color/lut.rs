//! Gamma lookup table access functions
//!
//! The 8-bit sRGB linearization table and the critical planes are
//! pre-computed at compile time by build.rs.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Linearize an 8-bit sRGB channel.
///
/// Returns linear light on a 0.0..=100.0 scale, the scale the XYZ
/// matrices and the HCT solver work in.
#[inline]
pub fn linearized(component: u8) -> f64 {
    SRGB_TO_LINEAR[component as usize]
}

/// Delinearize a linear channel (0.0..=100.0) to an 8-bit sRGB value.
///
/// Out-of-range input is clamped after rounding.
#[inline]
pub fn delinearized(component: f64) -> u8 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}
