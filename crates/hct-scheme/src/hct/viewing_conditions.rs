//! CAM16 viewing conditions
//!
//! Color appearance models account for the environment a color is seen
//! in. Everything in this crate uses one environment, the Material default
//! (a display viewed in a moderately lit room), so the derived factors are
//! computed once and shared.

use std::f64::consts::PI;
use std::sync::LazyLock;

use super::cam16::XYZ_TO_CAM16RGB;
use crate::color::math::lerp;
use crate::color::{y_from_lstar, WHITE_POINT_D65};

static DEFAULT: LazyLock<ViewingConditions> = LazyLock::new(|| {
    ViewingConditions::new(
        WHITE_POINT_D65,
        200.0 / PI * y_from_lstar(50.0) / 100.0,
        50.0,
        2.0,
        false,
    )
});

/// Intermediate CAM16 factors that depend only on the viewing environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    pub(crate) n: f64,
    pub(crate) aw: f64,
    pub(crate) nbb: f64,
    pub(crate) ncb: f64,
    pub(crate) c: f64,
    pub(crate) nc: f64,
    pub(crate) rgb_d: [f64; 3],
    pub(crate) fl: f64,
    pub(crate) fl_root: f64,
    pub(crate) z: f64,
}

impl ViewingConditions {
    /// Derive viewing conditions from physical parameters.
    ///
    /// # Arguments
    /// * `white_point` - XYZ of the adopted white (Y = 100)
    /// * `adapting_luminance` - luminance of the adapting field in cd/m²
    /// * `background_lstar` - L* of the area around the color
    /// * `surround` - 0.0 dark, 1.0 dim, 2.0 average
    /// * `discounting_illuminant` - whether the observer fully adapts to the illuminant
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let matrix = XYZ_TO_CAM16RGB;
        let xyz = white_point;
        let r_w = xyz[0] * matrix[0][0] + xyz[1] * matrix[0][1] + xyz[2] * matrix[0][2];
        let g_w = xyz[0] * matrix[1][0] + xyz[1] * matrix[1][1] + xyz[2] * matrix[1][2];
        let b_w = xyz[0] * matrix[2][0] + xyz[1] * matrix[2][1] + xyz[2] * matrix[2][2];

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a_factors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = rgb_a_factors.map(|factor| 400.0 * factor / (factor + 27.13));
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// The shared default conditions.
    pub fn standard() -> &'static ViewingConditions {
        &DEFAULT
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        DEFAULT.clone()
    }
}
