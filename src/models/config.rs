use hct_scheme::quantize::DEFAULT_MAX_COLORS;
use hct_scheme::{
    Argb, CustomColor, Fallback, ParseColorError, Role, SchemeExtractor, SchemeVariant,
    ScoreOptions,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;

/// Theme extraction configuration loaded from YAML
///
/// ```yaml
/// max_colors: 128
/// variant: classic        # classic | content | tonal_spot | expressive | fidelity
///                         # | fruit_salad | monochrome | neutral | rainbow
/// score:
///   desired: 4
///   filter: true
///   fallback: most_populous   # or a hex color such as "#4285f4"
/// custom_colors:
///   - name: brand
///     value: "#e8175d"
///     blend: true             # harmonize toward the source color
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Upper bound on quantized colors
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// How palettes follow the source chroma
    #[serde(default)]
    pub variant: VariantName,

    /// Source color scoring
    #[serde(default)]
    pub score: ScoreConfig,

    /// Extra named colors emitted next to the scheme roles
    #[serde(default)]
    pub custom_colors: Vec<CustomColorConfig>,
}

fn default_max_colors() -> usize {
    DEFAULT_MAX_COLORS
}

/// Scheme variant as written in config files
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariantName {
    #[default]
    Classic,
    Content,
    TonalSpot,
    Expressive,
    Fidelity,
    FruitSalad,
    Monochrome,
    Neutral,
    Rainbow,
}

impl From<VariantName> for SchemeVariant {
    fn from(name: VariantName) -> Self {
        match name {
            VariantName::Classic => SchemeVariant::Classic,
            VariantName::Content => SchemeVariant::Content,
            VariantName::TonalSpot => SchemeVariant::TonalSpot,
            VariantName::Expressive => SchemeVariant::Expressive,
            VariantName::Fidelity => SchemeVariant::Fidelity,
            VariantName::FruitSalad => SchemeVariant::FruitSalad,
            VariantName::Monochrome => SchemeVariant::Monochrome,
            VariantName::Neutral => SchemeVariant::Neutral,
            VariantName::Rainbow => SchemeVariant::Rainbow,
        }
    }
}

/// A custom color entry
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomColorConfig {
    /// Lowercase snake_case; prefixes the generated role names
    pub name: String,

    pub value: HexColor,

    /// Rotate the hue toward the source color
    #[serde(default = "default_blend")]
    pub blend: bool,
}

fn default_blend() -> bool {
    true
}

impl From<&CustomColorConfig> for CustomColor {
    fn from(config: &CustomColorConfig) -> Self {
        CustomColor::new(config.name.clone(), config.value.0).blend(config.blend)
    }
}

/// Opaque color written as hex text
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct HexColor(pub Argb);

impl TryFrom<String> for HexColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(HexColor(value.parse::<Argb>()?.opaque()))
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Number of hue-diverse candidates to keep
    #[serde(default = "default_desired")]
    pub desired: usize,

    /// Drop grays and rare hues before ranking
    #[serde(default = "default_filter")]
    pub filter: bool,

    #[serde(default)]
    pub fallback: FallbackConfig,
}

fn default_desired() -> usize {
    4
}

fn default_filter() -> bool {
    true
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            desired: default_desired(),
            filter: default_filter(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// `most_populous` or a hex color
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum FallbackConfig {
    #[default]
    MostPopulous,
    Color(Argb),
}

impl TryFrom<String> for FallbackConfig {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "most_populous" {
            return Ok(FallbackConfig::MostPopulous);
        }
        value
            .parse::<Argb>()
            .map(|argb| FallbackConfig::Color(argb.opaque()))
            .map_err(|e| format!("fallback must be 'most_populous' or a hex color: {e}"))
    }
}

impl From<FallbackConfig> for Fallback {
    fn from(config: FallbackConfig) -> Self {
        match config {
            FallbackConfig::MostPopulous => Fallback::MostPopulous,
            FallbackConfig::Color(argb) => Fallback::Color(argb),
        }
    }
}

impl From<ScoreConfig> for ScoreOptions {
    fn from(config: ScoreConfig) -> Self {
        ScoreOptions {
            desired: config.desired,
            filter: config.filter,
            fallback: config.fallback.into(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            variant: VariantName::default(),
            score: ScoreConfig::default(),
            custom_colors: Vec::new(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    max_colors = config.max_colors,
                    variant = SchemeVariant::from(config.variant).name(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_colors == 0 {
            return Err(ConfigError::Invalid(
                "max_colors must be at least 1".to_string(),
            ));
        }
        if self.score.desired == 0 {
            return Err(ConfigError::Invalid(
                "score.desired must be at least 1".to_string(),
            ));
        }
        self.validate_custom_colors()
    }

    /// Names must be snake_case and none of the generated role names may
    /// repeat or shadow a scheme role
    fn validate_custom_colors(&self) -> Result<(), ConfigError> {
        let mut taken: HashSet<String> = Role::ALL.iter().map(|r| r.name().to_string()).collect();
        for color in &self.custom_colors {
            let name = color.name.as_str();
            let well_formed = name.starts_with(|c: char| c.is_ascii_lowercase())
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if !well_formed {
                return Err(ConfigError::Invalid(format!(
                    "custom color name {name:?} must be lowercase snake_case"
                )));
            }
            let generated = [
                name.to_string(),
                format!("on_{name}"),
                format!("{name}_container"),
                format!("on_{name}_container"),
            ];
            for role_name in generated {
                if !taken.insert(role_name.clone()) {
                    return Err(ConfigError::Invalid(format!(
                        "custom color {name:?} produces role {role_name:?}, which already exists"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Custom colors in config order
    pub fn custom_colors(&self) -> Vec<CustomColor> {
        self.custom_colors.iter().map(CustomColor::from).collect()
    }

    /// Extractor configured from these settings
    pub fn extractor(&self) -> SchemeExtractor {
        SchemeExtractor::new()
            .max_colors(self.max_colors)
            .variant(self.variant.into())
            .score_options(self.score.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ThemeConfig::default();

        assert_eq!(config.max_colors, 128);
        assert_eq!(config.variant, VariantName::Classic);
        assert_eq!(config.score.desired, 4);
        assert!(config.score.filter);
        assert_eq!(config.score.fallback, FallbackConfig::MostPopulous);
        assert_eq!(config.extractor(), SchemeExtractor::new());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ThemeConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_full_document() {
        let yaml = r##"
max_colors: 32
variant: tonal_spot
score:
  desired: 2
  filter: false
  fallback: "#4285f4"
"##;
        let config = ThemeConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.max_colors, 32);
        assert_eq!(config.variant, VariantName::TonalSpot);
        assert_eq!(config.score.desired, 2);
        assert!(!config.score.filter);
        assert_eq!(
            config.score.fallback,
            FallbackConfig::Color(Argb::new(0xff4285f4))
        );

        let options: ScoreOptions = config.score.into();
        assert_eq!(options.fallback, Fallback::Color(Argb::new(0xff4285f4)));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = ThemeConfig::from_yaml_str("variant: sepia").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_fallback_rejected() {
        let err = ThemeConfig::from_yaml_str("score:\n  fallback: blue").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("most_populous"));
    }

    #[test]
    fn test_zero_max_colors_invalid() {
        let err = ThemeConfig::from_yaml_str("max_colors: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_every_variant_name_parses() {
        for variant in SchemeVariant::ALL {
            let config = ThemeConfig::from_yaml_str(&format!("variant: {}", variant.name())).unwrap();
            assert_eq!(SchemeVariant::from(config.variant), variant);
        }
    }

    #[test]
    fn test_custom_colors() {
        let yaml = r##"
custom_colors:
  - name: brand
    value: "#E8175D"
  - name: warning
    value: "fb0"
    blend: false
"##;
        let config = ThemeConfig::from_yaml_str(yaml).unwrap();
        let colors = config.custom_colors();

        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], CustomColor::new("brand", Argb::new(0xffe8175d)));
        assert!(colors[0].blend);
        assert_eq!(colors[1].value, Argb::new(0xffffbb00));
        assert!(!colors[1].blend);
    }

    #[test]
    fn test_custom_color_bad_hex_rejected() {
        let yaml = "custom_colors:\n  - name: brand\n    value: \"#12345\"\n";
        let err = ThemeConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("has 5 hex digits"), "{err}");
    }

    #[test]
    fn test_custom_color_names_validated() {
        let shadowing = "custom_colors:\n  - name: primary\n    value: \"#e8175d\"\n";
        let err = ThemeConfig::from_yaml_str(shadowing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: custom color \"primary\" produces role \"primary\", which already exists"
        );

        let nested = "custom_colors:\n  - name: brand\n    value: \"#e8175d\"\n  - name: on_brand\n    value: \"#00ff00\"\n";
        assert!(matches!(
            ThemeConfig::from_yaml_str(nested),
            Err(ConfigError::Invalid(_))
        ));

        let shouting = "custom_colors:\n  - name: Brand\n    value: \"#e8175d\"\n";
        let err = ThemeConfig::from_yaml_str(shouting).unwrap_err();
        assert!(err.to_string().contains("snake_case"), "{err}");
    }

    #[test]
    fn test_zero_desired_invalid() {
        let err = ThemeConfig::from_yaml_str("score:\n  desired: 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: score.desired must be at least 1"
        );
    }
}
