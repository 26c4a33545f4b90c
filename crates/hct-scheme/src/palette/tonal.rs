//! Tonal palettes
//!
//! A tonal palette holds one hue and chroma at every integer tone from 0
//! (black) to 100 (white). All 101 colors are solved when the palette is
//! built; lookups afterwards are plain indexing.

use crate::color::math::sanitize_degrees_double;
use crate::color::Argb;
use crate::hct::{GamutMappingFailure, Hct};

/// Tones Material schemes and swatch previews pick from.
pub const KEY_TONES: [u8; 14] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100];

/// One hue and chroma across tones 0..=100.
///
/// # Example
///
/// ```
/// use hct_scheme::palette::TonalPalette;
/// use hct_scheme::color::lstar_from_argb;
///
/// let palette = TonalPalette::new(270.0, 36.0).unwrap();
/// assert!((lstar_from_argb(palette.tone(40)) - 40.0).abs() <= 0.5);
/// assert_eq!(palette.tone(100).to_hex(), "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    tones: [Argb; 101],
}

impl TonalPalette {
    /// Solve every tone for the given hue and chroma.
    pub fn new(hue: f64, chroma: f64) -> Result<Self, GamutMappingFailure> {
        let hue = sanitize_degrees_double(hue);
        let mut tones = [Argb::new(0xff000000); 101];
        for (tone, slot) in tones.iter_mut().enumerate() {
            *slot = Hct::solve(hue, chroma, tone as f64)?.to_argb();
        }
        Ok(Self { hue, chroma, tones })
    }

    /// Palette with the hue and chroma of `argb`.
    pub fn from_argb(argb: Argb) -> Result<Self, GamutMappingFailure> {
        let hct = Hct::from_argb(argb);
        Self::new(hct.hue(), hct.chroma())
    }

    /// The color at `tone`; values above 100 read as 100.
    #[inline]
    pub fn tone(&self, tone: u8) -> Argb {
        self.tones[tone.min(100) as usize]
    }

    /// Requested hue in degrees, 0.0..360.0.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Requested chroma. Individual tones may fall short of it.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// `(tone, color)` for each of [`KEY_TONES`].
    pub fn key_tones(&self) -> impl Iterator<Item = (u8, Argb)> + '_ {
        KEY_TONES.iter().map(|&t| (t, self.tone(t)))
    }
}
