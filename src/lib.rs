//! Wallhue - Material You color schemes from images
//!
//! Service layer over the `hct-scheme` core: YAML configuration, structured
//! logging, serializable scheme output and comparison against reference
//! schemes. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, ThemeError};
pub use models::{SchemeSet, ThemeConfig};
pub use services::{Comparison, ReferenceSchemes, ThemeService};
