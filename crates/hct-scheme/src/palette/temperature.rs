//! Warm and cool colors
//!
//! Temperature is a function of L*a*b* hue and chroma: oranges near 50°
//! are warmest, blues near 230° coolest, and grays sit at -0.5. A
//! [`TemperatureCache`] solves one color at every hue with the input's
//! chroma and tone, so temperatures can be compared relative to the
//! coldest and warmest members of that ring.

use crate::color::lab_from_argb;
use crate::color::math::sanitize_degrees_double;
use crate::hct::{GamutMappingFailure, Hct};

/// Temperature ring around one input color.
#[derive(Debug, Clone)]
pub struct TemperatureCache {
    input: Hct,
    /// Index `h` holds hue `h` for h in 0..=360.
    hcts_by_hue: Vec<Hct>,
    coldest: Hct,
    warmest: Hct,
}

impl TemperatureCache {
    pub fn new(input: Hct) -> Result<Self, GamutMappingFailure> {
        let hcts_by_hue = (0..=360)
            .map(|hue| Hct::solve(hue as f64, input.chroma(), input.tone()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut by_temp: Vec<(f64, Hct)> = hcts_by_hue
            .iter()
            .chain(std::iter::once(&input))
            .map(|hct| (Self::raw_temperature(hct), *hct))
            .collect();
        by_temp.sort_by(|a, b| a.0.total_cmp(&b.0));

        // by_temp holds 362 entries, so first and last always exist
        let coldest = by_temp.first().map_or(input, |&(_, hct)| hct);
        let warmest = by_temp.last().map_or(input, |&(_, hct)| hct);

        Ok(Self {
            input,
            hcts_by_hue,
            coldest,
            warmest,
        })
    }

    /// Warmth of a color, roughly -0.5 (cool) to 1.0 (warm) for ordinary
    /// colors, with extremes a little beyond.
    pub fn raw_temperature(color: &Hct) -> f64 {
        let [_, a, b] = lab_from_argb(color.to_argb());
        let hue = sanitize_degrees_double(b.atan2(a).to_degrees());
        let chroma = a.hypot(b);
        -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees_double(hue - 50.0).to_radians().cos()
    }

    /// Where `hct` falls between the coldest (0.0) and warmest (1.0) colors
    /// of the ring. 0.5 when the ring has a single temperature.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        let coldest = Self::raw_temperature(&self.coldest);
        let range = Self::raw_temperature(&self.warmest) - coldest;
        if range == 0.0 {
            return 0.5;
        }
        (Self::raw_temperature(hct) - coldest) / range
    }

    pub fn coldest(&self) -> Hct {
        self.coldest
    }

    pub fn warmest(&self) -> Hct {
        self.warmest
    }

    /// The color of the ring on the opposite side of the coldest to warmest
    /// arc, closest to the mirrored relative temperature of the input.
    ///
    /// Grays, black and white have no temperature spread and are their own
    /// complement.
    pub fn complement(&self) -> Hct {
        let mut answer = self.by_hue(self.input.hue());
        let coldest_hue = self.coldest.hue();
        let warmest_hue = self.warmest.hue();
        let coldest_temp = Self::raw_temperature(&self.coldest);
        let range = Self::raw_temperature(&self.warmest) - coldest_temp;
        if range == 0.0 {
            return answer;
        }

        let starts_cold = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start, end) = if starts_cold {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let target = 1.0 - self.relative_temperature(&self.input);
        let mut smallest_error = f64::MAX;
        for addend in 0..=360 {
            let hue = sanitize_degrees_double(start + addend as f64);
            if !is_between(hue, start, end) {
                continue;
            }
            let candidate = self.by_hue(hue);
            let relative = (Self::raw_temperature(&candidate) - coldest_temp) / range;
            let error = (target - relative).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = candidate;
            }
        }
        answer
    }

    fn by_hue(&self, hue: f64) -> Hct {
        self.hcts_by_hue[(hue.round() as usize).min(360)]
    }
}

/// Whether `angle` lies on the arc from `a` to `b`, going up in hue.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb;

    fn hct(packed: u32) -> Hct {
        Hct::from_argb(Argb::new(packed))
    }

    #[test]
    fn test_raw_temperature() {
        let cases = [
            (0xff0000ff, -1.3935),
            (0xffff0000, 2.3514),
            (0xff00ff00, -0.267),
            (0xffffffff, -0.5),
            (0xff000000, -0.5),
        ];
        for (packed, expected) in cases {
            let temp = TemperatureCache::raw_temperature(&hct(packed));
            assert!(
                (temp - expected).abs() < 1e-3,
                "{packed:08x}: expected {expected}, got {temp}"
            );
        }
    }

    #[test]
    fn test_complement() {
        let cases = [
            (0xff0000ff, 0xff9d0002),
            (0xffff0000, 0xff007bfc),
            (0xff00ff00, 0xffffd2c9),
            (0xff6750a4, 0xff765b00),
        ];
        for (packed, expected) in cases {
            let complement = TemperatureCache::new(hct(packed)).unwrap().complement();
            assert_eq!(complement.to_argb(), Argb::new(expected), "{packed:08x}");
        }
    }

    #[test]
    fn test_complement_keeps_tone() {
        let input = hct(0xff0000ff);
        let complement = TemperatureCache::new(input).unwrap().complement();
        assert!((complement.tone() - input.tone()).abs() < 0.5);
        assert!((complement.hue() - 26.889).abs() < 1e-2);
    }

    #[test]
    fn test_achromatic_is_own_complement() {
        for packed in [0xffffffff, 0xff000000] {
            let cache = TemperatureCache::new(hct(packed)).unwrap();
            assert_eq!(cache.complement().to_argb(), Argb::new(packed));
            assert_eq!(cache.relative_temperature(&hct(packed)), 0.5);
        }
    }

    #[test]
    fn test_relative_temperature_bounds() {
        let cache = TemperatureCache::new(hct(0xff4285f4)).unwrap();
        assert_eq!(cache.relative_temperature(&cache.coldest()), 0.0);
        assert_eq!(cache.relative_temperature(&cache.warmest()), 1.0);
    }

    #[test]
    fn test_is_between_wraps() {
        assert!(is_between(30.0, 10.0, 50.0));
        assert!(!is_between(60.0, 10.0, 50.0));
        assert!(is_between(355.0, 300.0, 20.0));
        assert!(is_between(5.0, 300.0, 20.0));
        assert!(!is_between(100.0, 300.0, 20.0));
    }
}
