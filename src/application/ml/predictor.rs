use crate::domain::errors::PredictionError;
use crate::domain::ml::EncodedFeatureRow;

/// Interface for pre-trained sales regression models.
///
/// Loaded once at startup and shared read-only across submissions.
pub trait SalesPredictor: Send + Sync {
    /// Predict the sales value for one encoded row.
    fn predict(&self, row: &EncodedFeatureRow) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
