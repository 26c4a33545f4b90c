//! HCT solver
//!
//! Finds the sRGB color for a requested (hue, chroma, tone). Tone fixes the
//! luminance Y, so the search runs on the plane of constant Y through the
//! linear RGB cube:
//!
//! ```text
//!   hue, chroma, tone
//!         │
//!         ▼
//!   find_by_j ── Newton iteration on CAM16 J ──► in gamut? ──► Argb
//!         │ no
//!         ▼
//!   bisect_to_segment ── 12 cube-edge vertices of the Y plane
//!         │
//!         ▼
//!   bisect_to_limit ── bisection across the critical planes ──► Argb
//! ```
//!
//! Out-of-gamut requests keep hue and tone and lose chroma.

use std::f64::consts::PI;
use std::fmt;

use super::viewing_conditions::ViewingConditions;
use crate::color::math::{matrix_multiply, sanitize_degrees_double, signum};
use crate::color::{argb_from_linrgb, argb_from_lstar, y_from_lstar, Argb, CRITICAL_PLANES};

const SCALED_DISCOUNT_FROM_LINRGB: [[f64; 3]; 3] = [
    [
        0.001200833568784504,
        0.002389694492170889,
        0.0002795742885861124,
    ],
    [
        0.0005891086651375999,
        0.0029785502573438758,
        0.0003270666104008398,
    ],
    [
        0.00010146692491640572,
        0.0005364214359186694,
        0.0032979401770712076,
    ],
];

const LINRGB_FROM_SCALED_DISCOUNT: [[f64; 3]; 3] = [
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197812385],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The requested tone produced a luminance plane that misses the RGB cube.
///
/// Every tone in 0..=100 maps to a Y inside the cube, so this only
/// surfaces if the color transforms themselves are wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMappingFailure {
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
}

impl fmt::Display for GamutMappingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no sRGB color for hue {:.3}, chroma {:.3}, tone {:.3}",
            self.hue, self.chroma, self.tone
        )
    }
}

impl std::error::Error for GamutMappingFailure {}

/// Solve (hue, chroma, tone) to the closest sRGB color.
///
/// Hue is in degrees and wraps. Chroma is reduced to the maximum
/// available at that hue and tone when the request is out of gamut.
///
/// # Example
///
/// ```
/// use hct_scheme::hct::solver::solve;
/// use hct_scheme::color::lstar_from_argb;
///
/// let color = solve(27.4, 200.0, 50.0).unwrap();
/// assert!((lstar_from_argb(color) - 50.0).abs() < 0.5);
/// ```
pub fn solve(hue: f64, chroma: f64, tone: f64) -> Result<Argb, GamutMappingFailure> {
    if chroma < 0.0001 || !(0.0001..=99.9999).contains(&tone) {
        return Ok(argb_from_lstar(tone));
    }
    let hue_degrees = sanitize_degrees_double(hue);
    let hue_radians = hue_degrees / 180.0 * PI;
    let y = y_from_lstar(tone);
    if let Some(exact) = find_by_j(hue_radians, chroma, y) {
        return Ok(exact);
    }
    let failure = GamutMappingFailure { hue, chroma, tone };
    let linrgb = bisect_to_limit(y, hue_radians).ok_or(failure)?;
    Ok(argb_from_linrgb(linrgb))
}

fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

/// Delinearize without rounding; 0.0..=255.0.
fn true_delinearized(component: f64) -> f64 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// CAM16 hue of a linear RGB color, in radians.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled_discount = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled_discount[0]);
    let g_a = chromatic_adaptation(scaled_discount[1]);
    let b_a = chromatic_adaptation(scaled_discount[2]);
    let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// `t` such that `lerp(source, target, t) == mid`.
fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

/// Intersect segment AB with the plane `axis == coordinate`.
fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// The nth of 12 candidate vertices where the Y plane crosses a cube edge.
fn nth_vertex(y: f64, n: usize) -> Option<[f64; 3]> {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    let vertex = if n < 4 {
        let (g, b) = (coord_a, coord_b);
        [(y - g * k_g - b * k_b) / k_r, g, b]
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        [r, (y - r * k_r - b * k_b) / k_g, b]
    } else {
        let (r, g) = (coord_a, coord_b);
        [r, g, (y - r * k_r - g * k_g) / k_b]
    };
    let free_axis = n / 4;
    is_bounded(vertex[free_axis]).then_some(vertex)
}

/// Endpoints of the polygon edge whose hue range contains `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> Option<[[f64; 3]; 2]> {
    let mut left = [-1.0; 3];
    let mut right = left;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for mid in (0..12).filter_map(|n| nth_vertex(y, n)) {
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    initialized.then_some([left, right])
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

/// The color on the cube surface with luminance `y` and hue `target_hue`.
fn bisect_to_limit(y: f64, target_hue: f64) -> Option<[f64; 3]> {
    let [mut left, mut right] = bisect_to_segment(y, target_hue)?;
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };
        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            // Strictly between two planes at least 2 apart, so in 0..255
            let m_plane = (l_plane + r_plane).div_euclid(2);
            let mid_plane_coordinate = CRITICAL_PLANES[m_plane as usize];
            let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
            let mid_hue = hue_of(mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }
    Some(midpoint(left, right))
}

/// Newton iteration on J for an in-gamut color. `None` when the request is
/// out of gamut or the iteration does not settle.
fn find_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    let vc = ViewingConditions::standard();
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let scaled = [
            inverse_chromatic_adaptation(r_a),
            inverse_chromatic_adaptation(g_a),
            inverse_chromatic_adaptation(b_a),
        ];
        let linrgb = matrix_multiply(scaled, &LINRGB_FROM_SCALED_DISCOUNT);
        if linrgb.iter().any(|&c| c < 0.0) {
            return None;
        }
        let fnj = Y_FROM_LINRGB[0] * linrgb[0]
            + Y_FROM_LINRGB[1] * linrgb[1]
            + Y_FROM_LINRGB[2] * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|&c| c > 100.01) {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // Newton step with 2 * fn(j) / j approximating fn'(j)
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}
