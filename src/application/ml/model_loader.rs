use super::onnx_predictor::OnnxPredictor;
use super::predictor::SalesPredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::StartupError;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Loads the model artifact, picking the backend from the file extension.
pub fn load_predictor(path: &Path) -> Result<Arc<dyn SalesPredictor>, StartupError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let predictor: Arc<dyn SalesPredictor> = match extension.as_str() {
        "json" => Arc::new(SmartCorePredictor::load(path.to_path_buf())?),
        "onnx" => Arc::new(OnnxPredictor::load(path.to_path_buf())?),
        _ => return Err(StartupError::UnsupportedFormat { extension }),
    };

    info!(
        "Predictor ready: {} ({})",
        predictor.name(),
        predictor.version()
    );
    Ok(predictor)
}
