//! Blending colors in HCT and CAM16-UCS
//!
//! [`harmonize`] is what brand and custom colors go through before they
//! join a scheme: the hue turns toward the source color by half the
//! distance between them, at most 15°, while chroma and tone stay put.

use crate::color::math::{difference_degrees, rotation_direction, sanitize_degrees_double};
use crate::color::{lstar_from_argb, Argb};
use crate::hct::{Cam16, GamutMappingFailure, Hct};

/// Largest hue shift `harmonize` applies, in degrees.
const MAX_HARMONIZE_ROTATION: f64 = 15.0;

/// Rotate the hue of `design` toward `source`, keeping its chroma and tone.
///
/// # Example
///
/// ```
/// use hct_scheme::blend::harmonize;
/// use hct_scheme::Argb;
///
/// let red = Argb::new(0xffff0000);
/// let blue = Argb::new(0xff0000ff);
/// assert_eq!(harmonize(red, blue).unwrap(), Argb::new(0xfffb0057));
/// ```
pub fn harmonize(design: Argb, source: Argb) -> Result<Argb, GamutMappingFailure> {
    let from = Hct::from_argb(design);
    let to = Hct::from_argb(source);
    let rotation =
        (difference_degrees(from.hue(), to.hue()) * 0.5).min(MAX_HARMONIZE_ROTATION);
    let hue = sanitize_degrees_double(
        from.hue() + rotation * rotation_direction(from.hue(), to.hue()),
    );
    Ok(Hct::solve(hue, from.chroma(), from.tone())?.to_argb())
}

/// `from` with its hue moved `amount` of the way to `to` in CAM16-UCS.
/// Chroma and tone of `from` are kept.
pub fn hct_hue(from: Argb, to: Argb, amount: f64) -> Result<Argb, GamutMappingFailure> {
    let blended = Cam16::from_argb(cam16_ucs(from, to, amount));
    let original = Cam16::from_argb(from);
    let hct = Hct::solve(blended.hue(), original.chroma(), lstar_from_argb(from))?;
    Ok(hct.to_argb())
}

/// Straight-line interpolation in CAM16-UCS. `amount` 0.0 is `from`, 1.0 is `to`.
pub fn cam16_ucs(from: Argb, to: Argb, amount: f64) -> Argb {
    let a = Cam16::from_argb(from);
    let b = Cam16::from_argb(to);
    let jstar = a.jstar() + (b.jstar() - a.jstar()) * amount;
    let astar = a.astar() + (b.astar() - a.astar()) * amount;
    let bstar = a.bstar() + (b.bstar() - a.bstar()) * amount;
    Cam16::from_ucs(jstar, astar, bstar).to_argb()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Argb = Argb::new(0xffff0000);
    const GREEN: Argb = Argb::new(0xff00ff00);
    const BLUE: Argb = Argb::new(0xff0000ff);
    const YELLOW: Argb = Argb::new(0xffffff00);

    fn check(design: Argb, source: Argb, expected: u32) {
        let harmonized = harmonize(design, source).unwrap();
        assert_eq!(
            harmonized,
            Argb::new(expected),
            "{design} toward {source}: got {harmonized}"
        );
    }

    #[test]
    fn test_harmonize_red() {
        check(RED, BLUE, 0xfffb0057);
        check(RED, GREEN, 0xffd85600);
        check(RED, YELLOW, 0xffd85600);
    }

    #[test]
    fn test_harmonize_blue() {
        check(BLUE, GREEN, 0xff0047a3);
        check(BLUE, RED, 0xff5700dc);
        check(BLUE, YELLOW, 0xff0047a3);
    }

    #[test]
    fn test_harmonize_green() {
        check(GREEN, BLUE, 0xff00fc94);
        check(GREEN, RED, 0xffb1f000);
        check(GREEN, YELLOW, 0xffb1f000);
    }

    #[test]
    fn test_harmonize_yellow() {
        check(YELLOW, BLUE, 0xffebffba);
        check(YELLOW, GREEN, 0xffebffba);
        check(YELLOW, RED, 0xfffff6e3);
    }

    #[test]
    fn test_harmonize_keeps_tone() {
        let harmonized = harmonize(BLUE, RED).unwrap();
        assert!((lstar_from_argb(harmonized) - lstar_from_argb(BLUE)).abs() <= 0.5);
        assert_eq!(harmonize(RED, RED).unwrap(), RED);
    }

    #[test]
    fn test_cam16_ucs_endpoints_and_midpoint() {
        assert_eq!(cam16_ucs(RED, BLUE, 0.0), RED);
        assert_eq!(cam16_ucs(RED, BLUE, 1.0), BLUE);
        assert_eq!(cam16_ucs(RED, BLUE, 0.5), Argb::new(0xff9a4a86));
        assert_eq!(cam16_ucs(BLUE, RED, 0.5), Argb::new(0xff9a4a86));
    }

    #[test]
    fn test_hct_hue_keeps_from_chroma_and_tone() {
        assert_eq!(hct_hue(RED, BLUE, 0.0).unwrap(), RED);
        assert_eq!(hct_hue(RED, BLUE, 0.5).unwrap(), Argb::new(0xffe700c9));
        assert_eq!(hct_hue(GREEN, YELLOW, 0.5).unwrap(), Argb::new(0xffabf100));
    }
}
