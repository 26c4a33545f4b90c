//! HCT color space: CAM16 hue and chroma with CIE L* as tone
//!
//! Hue and chroma describe what a color looks like; tone is its lightness
//! as measured by L*, which is what contrast between two colors depends
//! on. Holding hue and chroma fixed while varying tone produces the tonal
//! ramps that schemes are built from.

mod cam16;
pub mod solver;
mod viewing_conditions;

pub use cam16::Cam16;
pub use solver::GamutMappingFailure;
pub use viewing_conditions::ViewingConditions;

#[cfg(test)]
pub(crate) use cam16::{CAM16RGB_TO_XYZ, XYZ_TO_CAM16RGB};

use crate::color::{lstar_from_argb, Argb};

/// A color in HCT coordinates, together with the sRGB color it names.
///
/// Values are always those of the solved color, so a request that exceeds
/// the sRGB gamut reads back with less chroma than was asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// HCT coordinates of an existing color.
    pub fn from_argb(argb: Argb) -> Self {
        let argb = argb.opaque();
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Solve the closest sRGB color to the requested coordinates.
    ///
    /// # Arguments
    /// * `hue` - degrees; wrapped into 0..360
    /// * `chroma` - reduced to what the gamut allows at this hue and tone
    /// * `tone` - L*, 0..=100
    pub fn solve(hue: f64, chroma: f64, tone: f64) -> Result<Self, GamutMappingFailure> {
        let argb = solver::solve(hue, chroma, tone)?;
        debug_assert!(
            (lstar_from_argb(argb) - tone.clamp(0.0, 100.0)).abs() < 1.0,
            "solver drifted in tone"
        );
        Ok(Self::from_argb(argb))
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn tone(&self) -> f64 {
        self.tone
    }

    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Same hue and chroma at a different tone.
    pub fn with_tone(&self, tone: f64) -> Result<Self, GamutMappingFailure> {
        Self::solve(self.hue, self.chroma, tone)
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_matches_cam16_and_lstar() {
        let blue = Argb::new(0xff0000ff);
        let hct = Hct::from_argb(blue);
        assert!((hct.hue() - 282.788).abs() < 1e-3);
        assert!((hct.chroma() - 87.230).abs() < 1e-3);
        assert!((hct.tone() - 32.302).abs() < 1e-3);
        assert_eq!(hct.to_argb(), blue);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let translucent = Argb::new(0x40ff0000);
        assert_eq!(Hct::from_argb(translucent).to_argb(), Argb::new(0xffff0000));
    }

    #[test]
    fn test_solve_round_trips_tone() {
        for hue in (0..360).step_by(30) {
            for chroma in [0.0, 16.0, 48.0, 120.0] {
                for tone in (0..=100).step_by(10) {
                    let hct = Hct::solve(hue as f64, chroma, tone as f64).unwrap();
                    assert!(
                        (hct.tone() - tone as f64).abs() <= 0.5,
                        "h{hue} c{chroma} t{tone} -> tone {}",
                        hct.tone()
                    );
                }
            }
        }
    }

    #[test]
    fn test_with_tone_keeps_hue() {
        let source = Hct::from_argb(Argb::new(0xff4285f4));
        let darker = source.with_tone(30.0).unwrap();
        assert!((darker.tone() - 30.0).abs() <= 0.5);
        assert!(crate::color::math::difference_degrees(darker.hue(), source.hue()) < 2.0);
    }
}
