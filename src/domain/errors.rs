use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the model artifact at startup.
///
/// These are fatal: the application refuses further interaction once one
/// has been reported.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Model file not found at {}", .path.display())]
    ModelNotFound { path: PathBuf },

    #[error("Failed to read model file {}: {source}", .path.display())]
    ModelUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model {}: {reason}", .path.display())]
    ModelCorrupt { path: PathBuf, reason: String },

    #[error("Unsupported model format '{extension}' (expected .json or .onnx)")]
    UnsupportedFormat { extension: String },
}

/// Errors raised while handling a single form submission.
///
/// Recoverable: the submission is discarded and the next one starts fresh.
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Encoding failed for column {column}: {reason}")]
    Encoding { column: String, reason: String },

    #[error("Feature row has {actual} columns, model expects {expected}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    #[error("Model returned no prediction")]
    EmptyPrediction,
}

impl PredictionError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn inference(reason: impl std::fmt::Display) -> Self {
        Self::Inference {
            reason: reason.to_string(),
        }
    }
}
