mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

/// Why a t411 settings file could not be turned into a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No t411 settings file at {path}")]
    FileNotFound { path: String },
    #[error("Cannot read t411 settings from {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },
    #[error("Invalid t411 setting `{key}`: {reason}")]
    ValidationError { key: &'static str, reason: String },
}
