//! CAM16 color appearance model
//!
//! Forward (color to appearance correlates) and inverse transforms under a
//! given [`ViewingConditions`]. Hue and chroma of every HCT color come from
//! here.

use super::viewing_conditions::ViewingConditions;
use crate::color::math::{matrix_multiply, signum};
use crate::color::{argb_from_xyz, xyz_from_argb, Argb};

/// XYZ to CAM16 cone response space.
pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// CAM16 cone response space back to XYZ.
pub(crate) const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

/// A color in CAM16 appearance correlates, plus CAM16-UCS coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam16 {
    /// Appearance of `argb` under the default viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, ViewingConditions::standard())
    }

    /// Appearance of `argb` under the given viewing conditions.
    pub fn from_argb_in(argb: Argb, vc: &ViewingConditions) -> Self {
        let xyz = xyz_from_argb(argb);
        let cone = matrix_multiply(xyz, &XYZ_TO_CAM16RGB);

        // Discount illuminant, then chromatic adaptation
        let d = [
            vc.rgb_d[0] * cone[0],
            vc.rgb_d[1] * cone[1],
            vc.rgb_d[2] * cone[2],
        ];
        let adapted = d.map(|component| {
            let af = (vc.fl * component.abs() / 100.0).powf(0.42);
            signum(component) * 400.0 * af / (af + 27.13)
        });

        let red_green = (11.0 * adapted[0] - 12.0 * adapted[1] + adapted[2]) / 11.0;
        let yellow_blue = (adapted[0] + adapted[1] - 2.0 * adapted[2]) / 9.0;
        let u = (20.0 * adapted[0] + 20.0 * adapted[1] + 21.0 * adapted[2]) / 20.0;
        let p2 = (40.0 * adapted[0] + 20.0 * adapted[1] + adapted[2]) / 20.0;

        let atan_degrees = yellow_blue.atan2(red_green).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * (red_green * red_green + yellow_blue * yellow_blue).sqrt() / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n)).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Build from lightness `j`, chroma `c` and hue `h` (degrees) under the
    /// default viewing conditions.
    pub fn from_jch(j: f64, c: f64, h: f64) -> Self {
        let vc = ViewingConditions::standard();
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = c * vc.fl_root;
        let alpha = c / (j / 100.0).sqrt();
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let hue_radians = h.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        Self {
            hue: h,
            chroma: c,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Build from CAM16-UCS coordinates under the default viewing conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        let vc = ViewingConditions::standard();
        let m = astar.hypot(bstar);
        let colorfulness = (m * 0.0228).exp_m1() / 0.0228;
        let c = colorfulness / vc.fl_root;
        let mut h = bstar.atan2(astar).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch(j, c, h)
    }

    /// The color under the default viewing conditions.
    pub fn to_argb(&self) -> Argb {
        self.viewed(ViewingConditions::standard())
    }

    /// The color these correlates describe when seen under `vc`.
    pub fn viewed(&self, vc: &ViewingConditions) -> Argb {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let unadapt = |adapted: f64| {
            let base = ((27.13 * adapted.abs()) / (400.0 - adapted.abs())).max(0.0);
            signum(adapted) * (100.0 / vc.fl) * base.powf(1.0 / 0.42)
        };
        let rgb_f = [
            unadapt(r_a) / vc.rgb_d[0],
            unadapt(g_a) / vc.rgb_d[1],
            unadapt(b_a) / vc.rgb_d[2],
        ];

        argb_from_xyz(matrix_multiply(rgb_f, &CAM16RGB_TO_XYZ))
    }

    /// Perceptual distance in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }

    /// Hue angle in degrees, 0.0..360.0.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Colorfulness relative to white.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Lightness.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Brightness.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Colorfulness.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Saturation.
    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn jstar(&self) -> f64 {
        self.jstar
    }

    pub fn astar(&self) -> f64 {
        self.astar
    }

    pub fn bstar(&self) -> f64 {
        self.bstar
    }
}
