//! Optional TOML overrides for the initial form values.

use crate::domain::sales::{FormDefaults, OrderForm};
use anyhow::{Context, Result};
use chrono::Local;
use std::env;
use std::path::Path;

pub struct FormDefaultsConfig;

impl FormDefaultsConfig {
    /// Reads `FORM_DEFAULTS_FILE` when set; built-in defaults otherwise.
    pub fn from_env() -> Result<FormDefaults> {
        match env::var("FORM_DEFAULTS_FILE") {
            Ok(path) => Self::load_file(Path::new(&path)),
            Err(_) => Ok(FormDefaults::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<FormDefaults> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form defaults file {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid form defaults in {:?}", path))
    }

    /// Missing keys keep their built-in values.
    pub fn parse(content: &str) -> Result<FormDefaults> {
        let defaults: FormDefaults = toml::from_str(content)?;

        OrderForm::from_defaults(&defaults, Local::now().date_naive()).validate()?;

        Ok(defaults)
    }
}
