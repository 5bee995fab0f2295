mod common;

use chrono::NaiveDate;
use salescast::application::ml::load_predictor;
use salescast::application::prediction_service::PredictionService;
use salescast::application::report::SubmissionOutcome;
use salescast::domain::errors::StartupError;
use salescast::domain::ml::FEATURE_NAMES;

fn service_from_artifact(dir: &std::path::Path) -> PredictionService {
    let path = common::write_forest_artifact(dir);
    PredictionService::new(load_predictor(&path).expect("artifact should load"))
}

#[test]
fn test_end_to_end_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_from_artifact(dir.path());

    let outcome = service.submit(&common::sample_form());
    let report = match outcome {
        SubmissionOutcome::Success(report) => report,
        other => panic!("expected success, got {:?}", other),
    };

    assert!(report.prediction.is_finite());
    assert_eq!(report.predictor, "SmartCore Random Forest");
    assert_eq!(report.timing_details.days_to_ship, 4);
    assert_eq!(report.timing_details.quarter, 1);
    assert_eq!(report.timing_details.is_weekend, "No");
    assert_eq!(report.order_details.discount, "15.0%");
    assert_eq!(report.features, FEATURE_NAMES.to_vec());

    let text = report.to_string();
    assert!(text.starts_with("Predicted Sales: $"));
    assert!(text.contains("Location Details:"));
}

#[test]
fn test_prediction_reproducible_across_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_forest_artifact(dir.path());
    let form = common::sample_form();

    let first = PredictionService::new(load_predictor(&path).unwrap())
        .predict(&form)
        .unwrap();
    let second = PredictionService::new(load_predictor(&path).unwrap())
        .predict(&form)
        .unwrap();

    assert_eq!(first.prediction, second.prediction);
    assert_eq!(first.encoded, second.encoded);
}

#[test]
fn test_categorical_inputs_are_inert() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_from_artifact(dir.path());

    let base = common::sample_form();
    let mut other = base.clone();
    other.ship_mode = "First Class".to_string();
    other.segment = "Corporate".to_string();
    other.city = "San Francisco".to_string();
    other.state = "Illinois".to_string();
    other.region = "Central".to_string();
    other.category = "Office Supplies".to_string();
    other.sub_category = "Binders".to_string();

    let a = service.predict(&base).unwrap();
    let b = service.predict(&other).unwrap();

    assert_eq!(a.prediction, b.prediction);
    assert_eq!(b.location_details.city, "San Francisco");
}

#[test]
fn test_ship_date_before_order_date_is_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_from_artifact(dir.path());

    let mut form = common::sample_form();
    form.order_date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    form.ship_date = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();

    let report = service.predict(&form).unwrap();
    assert_eq!(report.timing_details.days_to_ship, -2);
}

#[test]
fn test_failed_request_does_not_poison_service() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_from_artifact(dir.path());

    let mut bad = common::sample_form();
    bad.discount = 3.0;
    assert!(!service.submit(&bad).is_success());
    assert!(service.submit(&common::sample_form()).is_success());
}

#[test]
fn test_missing_artifact_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_predictor(&dir.path().join("final_sales_forecasting_model.json"));
    assert!(matches!(result, Err(StartupError::ModelNotFound { .. })));
}

#[test]
fn test_corrupt_artifact_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final_sales_forecasting_model.json");
    std::fs::write(&path, b"{ \"trees\": ").unwrap();

    let result = load_predictor(&path);
    assert!(matches!(result, Err(StartupError::ModelCorrupt { .. })));
}

#[test]
fn test_outcome_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_from_artifact(dir.path());

    let json = serde_json::to_value(service.submit(&common::sample_form())).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["order_details"]["Sub-Category"], "Chairs");
    assert_eq!(json["timing_details"]["Order Date"], "2024-01-01");

    let mut bad = common::sample_form();
    bad.quantity = 500;
    let json = serde_json::to_value(service.submit(&bad)).unwrap();
    assert_eq!(json["status"], "failure");
    assert!(json["message"].as_str().unwrap().contains("Quantity"));
}
