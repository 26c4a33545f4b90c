//! SchemeExtractor builder -- the primary entry point for the crate.
//!
//! [`SchemeExtractor`] wraps the extraction pipeline (sample, quantize,
//! score, derive palettes, build schemes) behind a fluent builder.

use super::error::ExtractError;
use crate::color::Argb;
use crate::palette::{CorePalette, SchemeVariant};
use crate::quantize::{QuantizedColor, QuantizerCelebi, DEFAULT_MAX_COLORS};
use crate::sample::{PixelLayout, PixelSampler};
use crate::scheme::SchemePair;
use crate::score::{score, ScoreOptions, ScoredColor};

/// Image-to-scheme extraction builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self`, so one extractor serves
///   many images
/// - Identical input and configuration give identical output
///
/// # Example
///
/// ```
/// use hct_scheme::{PixelLayout, Role, SchemeExtractor};
///
/// let red = [255u8, 0, 0].repeat(4);
/// let extraction = SchemeExtractor::new()
///     .extract(&red, 2, 2, PixelLayout::Rgb)
///     .unwrap();
///
/// assert_eq!(extraction.source().to_hex(), "#ff0000");
/// let schemes = extraction.schemes();
/// assert_ne!(schemes.light.get(Role::Primary), schemes.dark.get(Role::Primary));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeExtractor {
    max_colors: usize,
    variant: SchemeVariant,
    score_options: ScoreOptions,
}

impl Default for SchemeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeExtractor {
    /// Extractor with 128 quantized colors, the classic variant and default
    /// scoring.
    pub fn new() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            variant: SchemeVariant::Classic,
            score_options: ScoreOptions::default(),
        }
    }

    /// Upper bound on quantized colors. Zero is rejected at extraction.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// How palettes follow the source chroma.
    #[inline]
    pub fn variant(mut self, variant: SchemeVariant) -> Self {
        self.variant = variant;
        self
    }

    #[inline]
    pub fn score_options(mut self, options: ScoreOptions) -> Self {
        self.score_options = options;
        self
    }

    /// Run the pipeline over a decoded pixel buffer.
    ///
    /// 1. Validate and sample the buffer
    /// 2. Quantize (Wu, then weighted k-means)
    /// 3. Score and pick the source color
    /// 4. Derive the core palettes and both schemes
    pub fn extract(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<Extraction, ExtractError> {
        let sampler = PixelSampler::new(bytes, width, height, layout)?;
        let samples: Vec<Argb> = sampler.samples().collect();
        self.run(&samples)
    }

    /// Run the pipeline over colors that are already unpacked. Alpha is
    /// ignored.
    pub fn extract_samples(&self, samples: &[Argb]) -> Result<Extraction, ExtractError> {
        let opaque: Vec<Argb> = samples.iter().map(|c| c.opaque()).collect();
        self.run(&opaque)
    }

    fn run(&self, samples: &[Argb]) -> Result<Extraction, ExtractError> {
        if self.max_colors == 0 {
            return Err(ExtractError::InvalidMaxColors);
        }
        if samples.is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let quantized = QuantizerCelebi::quantize(samples, self.max_colors);
        let ranked = score(&quantized, &self.score_options);
        // Non-empty quantization always yields a most-populous fallback
        let source = ranked.first().map(|c| c.argb).ok_or(ExtractError::EmptyInput)?;

        let core = CorePalette::new(source, self.variant)?;
        let schemes = SchemePair::from_core_palette(source, &core, self.variant);

        Ok(Extraction {
            quantized,
            ranked,
            schemes,
            variant: self.variant,
        })
    }
}

/// Everything the pipeline produced for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    quantized: Vec<QuantizedColor>,
    ranked: Vec<ScoredColor>,
    schemes: SchemePair,
    variant: SchemeVariant,
}

impl Extraction {
    /// Quantized colors in cluster order.
    pub fn quantized(&self) -> &[QuantizedColor] {
        &self.quantized
    }

    /// Scored candidates, best first.
    pub fn ranked(&self) -> &[ScoredColor] {
        &self.ranked
    }

    /// The chosen source color, rank 0.
    pub fn source(&self) -> Argb {
        self.schemes.source
    }

    pub fn schemes(&self) -> &SchemePair {
        &self.schemes
    }

    pub fn variant(&self) -> SchemeVariant {
        self.variant
    }

    /// Take ownership of the schemes.
    pub fn into_schemes(self) -> SchemePair {
        self.schemes
    }
}
