//! Model artifact location.

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_FILENAME: &str = "final_sales_forecasting_model.json";

#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
}

impl ModelEnvConfig {
    pub fn from_env() -> Self {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());
        Self { model_path }
    }
}

/// The fixed filename next to the executable, or in the working directory
/// when only that copy exists.
pub fn default_model_path() -> PathBuf {
    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_MODEL_FILENAME)));
    resolve(beside_exe, Path::new(DEFAULT_MODEL_FILENAME))
}

fn resolve(beside_exe: Option<PathBuf>, in_cwd: &Path) -> PathBuf {
    match beside_exe {
        Some(path) if path.exists() || !in_cwd.exists() => path,
        _ => in_cwd.to_path_buf(),
    }
}
