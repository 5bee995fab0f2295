//! Widget-bound form state, independent of the rendering toolkit.

use crate::application::prediction_service::PredictionService;
use crate::application::report::SubmissionOutcome;
use crate::domain::errors::PredictionError;
use crate::domain::sales::{CalendarFeatures, FormDefaults, OrderForm};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FormViewModel {
    /// Numeric and categorical widgets bind straight into the form.
    pub form: OrderForm,
    pub order_date_text: String,
    pub ship_date_text: String,
    pub outcome: Option<SubmissionOutcome>,
}

impl FormViewModel {
    pub fn new(defaults: &FormDefaults, today: NaiveDate) -> Self {
        let today_text = today.format(DATE_FORMAT).to_string();
        Self {
            form: OrderForm::from_defaults(defaults, today),
            order_date_text: today_text.clone(),
            ship_date_text: today_text,
            outcome: None,
        }
    }

    fn parse_date(field: &str, text: &str) -> Result<NaiveDate, PredictionError> {
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
            PredictionError::invalid(field, format!("'{}' is not a YYYY-MM-DD date ({})", text, e))
        })
    }

    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), PredictionError> {
        let order = Self::parse_date("Order Date", &self.order_date_text)?;
        let ship = Self::parse_date("Ship Date", &self.ship_date_text)?;
        Ok((order, ship))
    }

    /// Live "Calculated Order Information", shown while the dates parse.
    pub fn preview(&self) -> Option<CalendarFeatures> {
        self.dates()
            .ok()
            .map(|(order, ship)| CalendarFeatures::derive(order, ship))
    }

    pub fn collect(&self) -> Result<OrderForm, PredictionError> {
        let (order_date, ship_date) = self.dates()?;
        Ok(OrderForm {
            order_date,
            ship_date,
            ..self.form.clone()
        })
    }

    /// Replaces any previous outcome; the next submission starts fresh.
    pub fn submit(&mut self, service: &PredictionService) {
        let outcome = match self.collect() {
            Ok(form) => service.submit(&form),
            Err(e) => PredictionService::reject(e),
        };
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::SalesPredictor;
    use crate::domain::ml::EncodedFeatureRow;
    use std::sync::Arc;

    struct QuantityPredictor;

    impl SalesPredictor for QuantityPredictor {
        fn predict(&self, row: &EncodedFeatureRow) -> Result<f64, PredictionError> {
            Ok(row.get("Quantity").unwrap_or(0.0) * 10.0)
        }

        fn name(&self) -> &str {
            "quantity"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    fn view_model() -> FormViewModel {
        FormViewModel::new(
            &FormDefaults::default(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_initial_dates_are_today() {
        let vm = view_model();
        assert_eq!(vm.order_date_text, "2024-01-01");
        assert_eq!(vm.ship_date_text, "2024-01-01");
        assert!(vm.outcome.is_none());

        let preview = vm.preview().unwrap();
        assert_eq!(preview.weekday_name(), "Monday");
        assert_eq!(preview.days_to_ship, 0);
    }

    #[test]
    fn test_preview_hidden_for_bad_date() {
        let mut vm = view_model();
        vm.ship_date_text = "2024-13-01".to_string();

        assert!(vm.preview().is_none());
        assert!(matches!(
            vm.collect(),
            Err(PredictionError::InvalidInput { ref field, .. }) if field == "Ship Date"
        ));
    }

    #[test]
    fn test_collect_uses_parsed_dates() {
        let mut vm = view_model();
        vm.order_date_text = " 2024-06-10 ".to_string();
        vm.ship_date_text = "2024-06-08".to_string();

        let form = vm.collect().unwrap();
        assert_eq!(form.order_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(vm.preview().unwrap().days_to_ship, -2);
    }

    #[test]
    fn test_submit_records_outcome() {
        let service = PredictionService::new(Arc::new(QuantityPredictor));
        let mut vm = view_model();
        vm.form.quantity = 4;

        vm.submit(&service);
        match vm.outcome.as_ref().unwrap() {
            SubmissionOutcome::Success(report) => assert_eq!(report.prediction, 40.0),
            other => panic!("expected success, got {:?}", other),
        }

        vm.order_date_text = "not a date".to_string();
        vm.submit(&service);
        assert!(!vm.outcome.as_ref().unwrap().is_success());

        vm.order_date_text = "2024-01-02".to_string();
        vm.submit(&service);
        assert!(vm.outcome.as_ref().unwrap().is_success());
    }
}
