#![allow(dead_code)]

use chrono::NaiveDate;
use salescast::domain::ml::FEATURE_COUNT;
use salescast::domain::sales::{FormDefaults, OrderForm};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Fits a small forest on synthetic rows and writes it where the app looks
/// for its artifact.
pub fn write_forest_artifact(dir: &Path) -> PathBuf {
    let x: Vec<Vec<f64>> = (0..60)
        .map(|i| {
            let mut row = vec![0.0; FEATURE_COUNT];
            row[0] = (i % 4) as f64; // Ship Mode code at training time
            row[2] = (i % 5) as f64; // City code at training time
            row[7] = (i % 12 + 1) as f64; // Quantity
            row[8] = (i % 5) as f64 * 0.1; // Discount
            row[9] = (i as f64 - 30.0) * 5.0; // Profit
            row[10] = (i % 7) as f64; // Order_DayOfWeek
            row[11] = (i % 12 + 1) as f64; // Order_Month
            row[12] = 2024.0; // Order_Year
            row[15] = (i % 9) as f64 - 2.0; // Days_to_Ship
            row[16] = 100.0 + i as f64; // total_quantity_ordered
            row
        })
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|r| r[7] * 45.0 + r[9] - r[8] * 200.0 + r[15] * 3.0)
        .collect();

    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(10)
        .with_max_depth(8)
        .with_min_samples_split(2);
    let model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>> =
        RandomForestRegressor::fit(&matrix, &y, params).unwrap();

    let path = dir.join("final_sales_forecasting_model.json");
    let mut file = File::create(&path).unwrap();
    serde_json::to_writer(&mut file, &model).unwrap();
    path
}

pub fn sample_form() -> OrderForm {
    let mut form = OrderForm::from_defaults(
        &FormDefaults::default(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    );
    form.ship_date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    form.quantity = 6;
    form.discount = 0.15;
    form.profit = 75.0;
    form
}
