use hct_scheme::{
    Argb, CustomColorGroup, ExtractError, Extraction, PixelLayout, SchemeExtractor, SchemeVariant,
};
use std::path::Path;

use crate::error::ThemeError;
use crate::models::{SchemeSet, ThemeConfig};
use crate::services::comparison::{compare, Comparison, ImageRef, ReferenceSchemes};

/// Extracts schemes from decoded images according to a [`ThemeConfig`]
pub struct ThemeService {
    config: ThemeConfig,
    extractor: SchemeExtractor,
}

impl ThemeService {
    pub fn new(config: ThemeConfig) -> Result<Self, ThemeError> {
        config.validate()?;
        let extractor = config.extractor();
        Ok(Self { config, extractor })
    }

    /// Build a service from a YAML config file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        Self::new(ThemeConfig::load(path)?)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Run the full pipeline over one decoded image
    pub fn extract(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<Extraction, ThemeError> {
        let span = tracing::info_span!("extract", width, height);
        let _enter = span.enter();

        let extraction = self
            .extractor
            .extract(bytes, width, height, layout)
            .inspect_err(|e| tracing::warn!(%e, "Extraction failed"))?;

        tracing::debug!(
            colors = extraction.quantized().len(),
            candidates = extraction.ranked().len(),
            "Quantized"
        );
        tracing::info!(
            source = %extraction.source(),
            variant = SchemeVariant::from(self.config.variant).name(),
            "Selected source color"
        );

        Ok(extraction)
    }

    /// Extract and convert to the serializable form, with any configured
    /// custom colors resolved against the chosen source
    pub fn scheme_set(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<SchemeSet, ThemeError> {
        let extraction = self.extract(bytes, width, height, layout)?;
        let custom = self.custom_color_groups(extraction.source())?;
        Ok(SchemeSet::from(extraction).with_custom_colors(custom))
    }

    /// Palettes and roles for each configured custom color
    pub fn custom_color_groups(&self, source: Argb) -> Result<Vec<CustomColorGroup>, ThemeError> {
        self.config
            .custom_colors()
            .into_iter()
            .map(|color| -> Result<CustomColorGroup, ThemeError> {
                let group = CustomColorGroup::new(source, color).map_err(ExtractError::from)?;
                tracing::debug!(
                    name = %group.color.name,
                    value = %group.value,
                    blended = group.color.blend,
                    "Resolved custom color"
                );
                Ok(group)
            })
            .collect()
    }

    /// Extract from `image` and compare against what `reference` produces
    /// for the same image
    pub fn compare_with<R>(&self, image: &ImageRef<'_>, reference: &R) -> Result<Comparison, ThemeError>
    where
        R: ReferenceSchemes + ?Sized,
    {
        let extraction = self.extract(image.bytes, image.width, image.height, image.layout)?;
        let theirs = reference.reference(image).inspect_err(|e| {
            tracing::warn!(%e, image = image.name, "Reference failed");
        })?;

        let comparison = compare(extraction.schemes(), &theirs);
        tracing::info!(
            image = image.name,
            mismatches = comparison.mismatches().len(),
            source_matches = comparison.source_matches(),
            "Compared against reference"
        );
        Ok(comparison)
    }
}
