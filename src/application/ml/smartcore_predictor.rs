use super::predictor::SalesPredictor;
use crate::domain::errors::{PredictionError, StartupError};
use crate::domain::ml::EncodedFeatureRow;
use crate::domain::ml::feature_registry::features_to_f64_vector;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

pub struct SmartCorePredictor {
    model: ForestModel,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    pub fn load(model_path: PathBuf) -> Result<Self, StartupError> {
        if !model_path.exists() {
            return Err(StartupError::ModelNotFound { path: model_path });
        }

        let mut buffer = Vec::new();
        File::open(&model_path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(|source| StartupError::ModelUnreadable {
                path: model_path.clone(),
                source,
            })?;

        // Smartcore models are stored as serde_json
        let model: ForestModel =
            serde_json::from_slice(&buffer).map_err(|e| StartupError::ModelCorrupt {
                path: model_path.clone(),
                reason: e.to_string(),
            })?;

        info!("Successfully loaded ML model from {:?}", model_path);
        Ok(Self { model, model_path })
    }

    pub fn from_model(model: ForestModel) -> Self {
        Self {
            model,
            model_path: PathBuf::new(),
        }
    }

    pub fn model_path(&self) -> &PathBuf {
        &self.model_path
    }
}

impl SalesPredictor for SmartCorePredictor {
    fn predict(&self, row: &EncodedFeatureRow) -> Result<f64, PredictionError> {
        let input_vec = features_to_f64_vector(row);
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| PredictionError::inference(format!("Matrix creation failed: {}", e)))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::inference(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or(PredictionError::EmptyPrediction)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
