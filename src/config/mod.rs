//! Configuration module for the sales predictor.
//!
//! Loads from environment variables (after `.env`), organized by concern:
//! model artifact location and form defaults.

mod form_defaults_config;
mod model_config;

pub use form_defaults_config::FormDefaultsConfig;
pub use model_config::{DEFAULT_MODEL_FILENAME, ModelEnvConfig};

use crate::domain::sales::FormDefaults;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub form_defaults: FormDefaults,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let model = ModelEnvConfig::from_env();
        let form_defaults =
            FormDefaultsConfig::from_env().context("Failed to load form defaults")?;

        Ok(Self {
            model_path: model.model_path,
            form_defaults,
        })
    }
}
