use super::feature_row::EncodedFeatureRow;

pub const FEATURE_COUNT: usize = 24;

/// Ordered list of feature column names.
/// This order MUST match exactly the column order the model was fit on.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Ship Mode",
    "Segment",
    "City",
    "State",
    "Region",
    "Category",
    "Sub-Category",
    "Quantity",
    "Discount",
    "Profit",
    "Order_DayOfWeek",
    "Order_Month",
    "Order_Year",
    "Order_Quarter",
    "Is_Weekend",
    "Days_to_Ship",
    "total_quantity_ordered",
    "total_sales_by_product",
    "avg_profit_by_product",
    "total_orders_by_customer",
    "avg_order_value_customer",
    "total_sales_by_customer",
    "region_total_sales",
    "region_avg_sales",
];

/// Columns label-encoded before inference. They occupy the leading slots.
pub const CATEGORICAL_FEATURES: [&str; 7] = [
    "Ship Mode",
    "Segment",
    "City",
    "State",
    "Region",
    "Category",
    "Sub-Category",
];

pub fn column_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Converts an encoded row into a vector (f32) for ONNX inference.
pub fn features_to_vector(row: &EncodedFeatureRow) -> Vec<f32> {
    row.values().iter().map(|v| *v as f32).collect()
}

/// Same as `features_to_vector` but keeps f64 precision for smartcore models.
pub fn features_to_f64_vector(row: &EncodedFeatureRow) -> Vec<f64> {
    row.values().to_vec()
}
