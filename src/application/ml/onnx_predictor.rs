use super::predictor::SalesPredictor;
use crate::domain::errors::{PredictionError, StartupError};
use crate::domain::ml::feature_registry::features_to_vector;
use crate::domain::ml::{EncodedFeatureRow, FEATURE_COUNT};
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// ONNX graph with a single `[1, FEATURE_COUNT]` float input.
pub struct OnnxPredictor {
    // `Session::run` needs `&mut`
    session: Mutex<Session>,
    model_path: PathBuf,
}

impl OnnxPredictor {
    pub fn load(model_path: PathBuf) -> Result<Self, StartupError> {
        if !model_path.exists() {
            return Err(StartupError::ModelNotFound { path: model_path });
        }

        let session = match Session::builder() {
            Ok(mut builder) => match builder.commit_from_file(&model_path) {
                Ok(session) => session,
                Err(e) => {
                    return Err(StartupError::ModelCorrupt {
                        path: model_path,
                        reason: e.to_string(),
                    });
                }
            },
            Err(e) => {
                return Err(StartupError::ModelCorrupt {
                    path: model_path,
                    reason: format!("Failed to create ONNX session builder: {}", e),
                });
            }
        };

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
            model_path,
        })
    }

    pub fn model_path(&self) -> &PathBuf {
        &self.model_path
    }
}

impl SalesPredictor for OnnxPredictor {
    fn predict(&self, row: &EncodedFeatureRow) -> Result<f64, PredictionError> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::inference(format!("Mutex lock failed: {}", e)))?;

        let input_data = features_to_vector(row);
        let shape = vec![1, FEATURE_COUNT];

        let input_value = ort::value::Value::from_array((shape.as_slice(), input_data))
            .map_err(|e| PredictionError::inference(format!("Input value creation failed: {}", e)))?;

        let inputs = ort::inputs![input_value];

        let outputs = session.run(inputs).map_err(PredictionError::inference)?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or(PredictionError::EmptyPrediction)?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(PredictionError::inference)?;

        data.1
            .iter()
            .next()
            .map(|v| *v as f64)
            .ok_or(PredictionError::EmptyPrediction)
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
