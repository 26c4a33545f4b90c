use hct_scheme::ExtractError;
use thiserror::Error;

use crate::services::comparison::ReferenceError;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference error: {0}")]
    Reference(#[from] ReferenceError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
