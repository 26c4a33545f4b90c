use super::dislike::fix_if_disliked;
use super::temperature::TemperatureCache;
use super::tonal::TonalPalette;
use crate::color::math::sanitize_degrees_double;
use crate::color::Argb;
use crate::hct::{GamutMappingFailure, Hct};

/// How source chroma carries into the six palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeVariant {
    /// Material You defaults: primary at least chroma 48, quiet accents.
    #[default]
    Classic,
    /// Palettes scale with the source chroma, for content-driven themes.
    Content,
    /// Fixed moderate chroma regardless of the source.
    TonalSpot,
    /// Primary far from the source hue, accents rotated by hue region.
    Expressive,
    /// Primary is the source itself; tertiary is its temperature complement.
    Fidelity,
    /// Primary and secondary turned 50° back from the source.
    FruitSalad,
    /// Grayscale.
    Monochrome,
    /// Near-grayscale with a hint of the source hue.
    Neutral,
    /// Colorful accents over pure gray neutrals.
    Rainbow,
}

impl SchemeVariant {
    pub const ALL: [SchemeVariant; 9] = [
        SchemeVariant::Classic,
        SchemeVariant::Content,
        SchemeVariant::TonalSpot,
        SchemeVariant::Expressive,
        SchemeVariant::Fidelity,
        SchemeVariant::FruitSalad,
        SchemeVariant::Monochrome,
        SchemeVariant::Neutral,
        SchemeVariant::Rainbow,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            SchemeVariant::Classic => "classic",
            SchemeVariant::Content => "content",
            SchemeVariant::TonalSpot => "tonal_spot",
            SchemeVariant::Expressive => "expressive",
            SchemeVariant::Fidelity => "fidelity",
            SchemeVariant::FruitSalad => "fruit_salad",
            SchemeVariant::Monochrome => "monochrome",
            SchemeVariant::Neutral => "neutral",
            SchemeVariant::Rainbow => "rainbow",
        }
    }

    /// Variants whose surfaces sit at N98 / N6 instead of N99 / N10.
    pub fn has_dynamic_surfaces(self) -> bool {
        !matches!(self, SchemeVariant::Classic | SchemeVariant::Content)
    }
}

/// Hue regions for [`SchemeVariant::Expressive`] accents.
const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// `hue` plus the rotation of the region it falls strictly inside.
/// Hues on a region boundary are not rotated.
fn rotated_hue(hue: f64, hues: &[f64], rotations: &[f64]) -> f64 {
    hues.windows(2)
        .zip(rotations)
        .find(|(bounds, _)| bounds[0] < hue && hue < bounds[1])
        .map_or(hue, |(_, rotation)| sanitize_degrees_double(hue + rotation))
}

/// The six tonal palettes a scheme draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct CorePalette {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalette {
    /// Derive the palettes from a source color.
    ///
    /// | Variant | primary | secondary | tertiary | neutral | neutral variant |
    /// |---------|---------|-----------|----------|---------|-----------------|
    /// | Classic | h, max(c, 48) | h, 16 | h+60, 24 | h, 4 | h, 8 |
    /// | Content | h, c | h, c/3 | h+60, c/2 | h, min(c/12, 4) | h, min(c/6, 8) |
    /// | TonalSpot | h, 36 | h, 16 | h+60, 24 | h, 6 | h, 8 |
    /// | Expressive | h+240, 40 | rotated, 24 | rotated, 32 | h+15, 8 | h+15, 12 |
    /// | Fidelity | h, c | h, max(c-32, c/2) | complement | h, c/8 | h, c/8+4 |
    /// | FruitSalad | h-50, 48 | h-50, 36 | h, 36 | h, 10 | h, 16 |
    /// | Monochrome | h, 0 | h, 0 | h, 0 | h, 0 | h, 0 |
    /// | Neutral | h, 12 | h, 8 | h, 16 | h, 2 | h, 2 |
    /// | Rainbow | h, 48 | h, 16 | h+60, 24 | h, 0 | h, 0 |
    ///
    /// Fidelity's tertiary is the temperature complement of the source,
    /// lifted out of the disliked yellow-green region. Error is always hue
    /// 25, chroma 84.
    pub fn new(source: Argb, variant: SchemeVariant) -> Result<Self, GamutMappingFailure> {
        let hct = Hct::from_argb(source);
        let (h, c) = (hct.hue(), hct.chroma());

        let [primary, secondary, tertiary, neutral, neutral_variant] = match variant {
            SchemeVariant::Classic => [
                (h, c.max(48.0)),
                (h, 16.0),
                (h + 60.0, 24.0),
                (h, 4.0),
                (h, 8.0),
            ],
            SchemeVariant::Content => [
                (h, c),
                (h, c / 3.0),
                (h + 60.0, c / 2.0),
                (h, (c / 12.0).min(4.0)),
                (h, (c / 6.0).min(8.0)),
            ],
            SchemeVariant::TonalSpot => [
                (h, 36.0),
                (h, 16.0),
                (h + 60.0, 24.0),
                (h, 6.0),
                (h, 8.0),
            ],
            SchemeVariant::Expressive => [
                (h + 240.0, 40.0),
                (
                    rotated_hue(h, &EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS),
                    24.0,
                ),
                (
                    rotated_hue(h, &EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS),
                    32.0,
                ),
                (h + 15.0, 8.0),
                (h + 15.0, 12.0),
            ],
            SchemeVariant::Fidelity => {
                let complement = TemperatureCache::new(hct)?.complement();
                let tertiary = fix_if_disliked(complement)?;
                [
                    (h, c),
                    (h, (c - 32.0).max(c * 0.5)),
                    (tertiary.hue(), tertiary.chroma()),
                    (h, c / 8.0),
                    (h, c / 8.0 + 4.0),
                ]
            }
            SchemeVariant::FruitSalad => [
                (h - 50.0, 48.0),
                (h - 50.0, 36.0),
                (h, 36.0),
                (h, 10.0),
                (h, 16.0),
            ],
            SchemeVariant::Monochrome => [(h, 0.0); 5],
            SchemeVariant::Neutral => [
                (h, 12.0),
                (h, 8.0),
                (h, 16.0),
                (h, 2.0),
                (h, 2.0),
            ],
            SchemeVariant::Rainbow => [
                (h, 48.0),
                (h, 16.0),
                (h + 60.0, 24.0),
                (h, 0.0),
                (h, 0.0),
            ],
        };

        Ok(Self {
            primary: TonalPalette::new(primary.0, primary.1)?,
            secondary: TonalPalette::new(secondary.0, secondary.1)?,
            tertiary: TonalPalette::new(tertiary.0, tertiary.1)?,
            neutral: TonalPalette::new(neutral.0, neutral.1)?,
            neutral_variant: TonalPalette::new(neutral_variant.0, neutral_variant.1)?,
            error: TonalPalette::new(25.0, 84.0)?,
        })
    }
}
