//! CIE XYZ, L*a*b* and L* conversions
//!
//! The matrices here are fixed constants rather than derived from sRGB
//! primaries at runtime, so that two implementations of the same transform
//! land on identical bytes. Linear values are on a 0..=100 scale.

use super::argb::Argb;
use super::lut::{delinearized, linearized};
use super::math::matrix_multiply;

/// sRGB (linear, 0..=100) to XYZ.
pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// XYZ to sRGB (linear, 0..=100).
pub(crate) const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// D65 standard illuminant in XYZ (Y = 100).
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Convert linear RGB (0..=100 per channel) to a color, rounding and clamping.
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// Convert XYZ coordinates to a color.
pub fn argb_from_xyz(xyz: [f64; 3]) -> Argb {
    argb_from_linrgb(matrix_multiply(xyz, &XYZ_TO_SRGB))
}

/// Convert a color to XYZ coordinates.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    let linrgb = [
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    ];
    matrix_multiply(linrgb, &SRGB_TO_XYZ)
}

/// Convert a color to CIE L*a*b* `[l, a, b]`.
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIE L*a*b* to a color. Out-of-gamut input is clamped per channel.
pub fn argb_from_lab(l: f64, a: f64, b: f64) -> Argb {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    argb_from_xyz([
        lab_invf(fx) * WHITE_POINT_D65[0],
        lab_invf(fy) * WHITE_POINT_D65[1],
        lab_invf(fz) * WHITE_POINT_D65[2],
    ])
}

/// L* of a color, the "tone" axis of HCT.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = xyz_from_argb(argb)[1];
    116.0 * lab_f(y / 100.0) - 16.0
}

/// Y (relative luminance, 0..=100) for a given L*.
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* for a given Y (0..=100).
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// The gray with the given L*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > LAB_EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / LAB_KAPPA
    }
}
