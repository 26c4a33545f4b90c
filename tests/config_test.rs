//! Loading configuration from disk.

mod common;

use common::fixtures::configs;
use common::init_tracing;
use hct_scheme::{Argb, Fallback, SchemeVariant, ScoreOptions};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use wallhue::{ConfigError, ThemeConfig, ThemeError, ThemeService};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("wallhue.yaml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, configs::TONAL_SPOT);

    let config = ThemeConfig::load(&path)?;
    assert_eq!(config.max_colors, 64);
    assert_eq!(SchemeVariant::from(config.variant), SchemeVariant::TonalSpot);
    Ok(())
}

#[test]
fn test_fixed_fallback_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, configs::FIXED_FALLBACK);

    let config = ThemeConfig::load(&path)?;
    let options = ScoreOptions::from(config.score);
    assert_eq!(options.fallback, Fallback::Color(Argb::new(0xff4285f4)));

    // A gray image now resolves to the fixed color
    let service = ThemeService::new(config)?;
    let set = service.scheme_set(&[0x55, 0x55, 0x55], 1, 1, hct_scheme::PixelLayout::Rgb)?;
    assert_eq!(set.source().to_hex(), "#4285f4");
    Ok(())
}

#[test]
fn test_custom_colors_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, configs::FIDELITY_WITH_CUSTOM);

    let config = ThemeConfig::load(&path)?;
    assert_eq!(SchemeVariant::from(config.variant), SchemeVariant::Fidelity);
    let names: Vec<String> = config.custom_colors().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["brand", "success"]);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ThemeConfig::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err}");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, configs::INVALID_YAML);
    let err = ThemeConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
}

#[test]
fn test_load_or_default_falls_back() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let missing = ThemeConfig::load_or_default(dir.path().join("absent.yaml"));
    assert_eq!(missing, ThemeConfig::default());

    let path = write_config(&dir, configs::INVALID_YAML);
    assert_eq!(ThemeConfig::load_or_default(&path), ThemeConfig::default());

    let path = write_config(&dir, configs::DEFAULT);
    assert_eq!(ThemeConfig::load_or_default(&path), ThemeConfig::default());
}

#[test]
fn test_service_from_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "max_colors: 0\n");
    match ThemeService::from_config_file(&path) {
        Err(ThemeError::Config(ConfigError::Invalid(message))) => {
            assert_eq!(message, "max_colors must be at least 1");
        }
        Err(other) => panic!("Expected invalid config, got {other}"),
        Ok(_) => panic!("Expected invalid config"),
    }
}
