pub mod config;
pub mod scheme_set;

pub use config::{FallbackConfig, ScoreConfig, ThemeConfig, VariantName};
pub use scheme_set::SchemeSet;
