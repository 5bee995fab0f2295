//! Per-submission pipeline: collect -> derive -> encode -> predict.
//!
//! The predictor is injected once at startup and never mutated. Every
//! failure is scoped to the submission that raised it.

use super::ml::SalesPredictor;
use super::report::{FAILURE_HINT, FailureReport, PredictionReport, SubmissionOutcome};
use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureRow;
use crate::domain::ml::feature_registry::column_names;
use crate::domain::sales::OrderForm;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn SalesPredictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn SalesPredictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn predict(&self, form: &OrderForm) -> Result<PredictionReport, PredictionError> {
        form.validate()?;

        let row = FeatureRow::assemble(form);
        if row.calendar.days_to_ship < 0 {
            warn!(
                "Ship date {} precedes order date {} (days_to_ship = {})",
                form.ship_date, form.order_date, row.calendar.days_to_ship
            );
        }

        let encoded = row.encode()?;
        let prediction = self.predictor.predict(&encoded)?;
        if !prediction.is_finite() {
            return Err(PredictionError::inference(format!(
                "model returned non-finite value {}",
                prediction
            )));
        }

        info!(
            "Predicted sales {:.2} with {} ({})",
            prediction,
            self.predictor.name(),
            self.predictor.version()
        );
        Ok(PredictionReport::new(
            form,
            &row,
            encoded,
            prediction,
            self.predictor.name(),
        ))
    }

    /// Request boundary: never fails, reports the error instead.
    pub fn submit(&self, form: &OrderForm) -> SubmissionOutcome {
        match self.predict(form) {
            Ok(report) => SubmissionOutcome::Success(report),
            Err(e) => Self::reject(e),
        }
    }

    /// Builds the failure display for an error raised at any stage.
    pub fn reject(err: PredictionError) -> SubmissionOutcome {
        error!("Prediction request failed: {}", err);

        // No row exists yet when the form itself was invalid
        let columns = match err {
            PredictionError::InvalidInput { .. } => Vec::new(),
            _ => column_names(),
        };

        SubmissionOutcome::Failure(FailureReport {
            message: format!("An error occurred: {}", err),
            columns,
            hint: FAILURE_HINT.to_string(),
        })
    }
}
