use super::catalog::{CategoricalField, DISCOUNT_RANGE, PROFIT_RANGE, QUANTITY_RANGE};
use crate::domain::errors::PredictionError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pre-aggregated metrics typed in by the operator on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalMetrics {
    pub total_quantity_ordered: f64,
    pub total_sales_by_product: f64,
    pub avg_profit_by_product: f64,
    pub total_orders_by_customer: i64,
    pub avg_order_value_customer: f64,
    pub total_sales_by_customer: f64,
    pub region_total_sales: f64,
    pub region_avg_sales: f64,
}

impl Default for HistoricalMetrics {
    fn default() -> Self {
        Self {
            total_quantity_ordered: 100.0,
            total_sales_by_product: 5000.0,
            avg_profit_by_product: 250.0,
            total_orders_by_customer: 5,
            avg_order_value_customer: 1000.0,
            total_sales_by_customer: 5000.0,
            region_total_sales: 100000.0,
            region_avg_sales: 2000.0,
        }
    }
}

impl HistoricalMetrics {
    fn real_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("total_quantity_ordered", self.total_quantity_ordered),
            ("total_sales_by_product", self.total_sales_by_product),
            ("avg_profit_by_product", self.avg_profit_by_product),
            ("avg_order_value_customer", self.avg_order_value_customer),
            ("total_sales_by_customer", self.total_sales_by_customer),
            ("region_total_sales", self.region_total_sales),
            ("region_avg_sales", self.region_avg_sales),
        ]
    }
}

/// Initial form values. Every key is optional when loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub ship_mode: String,
    pub segment: String,
    pub city: String,
    pub state: String,
    pub region: String,
    pub category: String,
    pub sub_category: String,
    pub quantity: u32,
    pub discount: f64,
    pub profit: f64,
    pub history: HistoricalMetrics,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            ship_mode: CategoricalField::ShipMode.default_choice().to_string(),
            segment: CategoricalField::Segment.default_choice().to_string(),
            city: CategoricalField::City.default_choice().to_string(),
            state: CategoricalField::State.default_choice().to_string(),
            region: CategoricalField::Region.default_choice().to_string(),
            category: CategoricalField::Category.default_choice().to_string(),
            sub_category: CategoricalField::SubCategory.default_choice().to_string(),
            quantity: 3,
            discount: 0.2,
            profit: 50.0,
            history: HistoricalMetrics::default(),
        }
    }
}

/// Raw values of one form submission, before any derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub ship_mode: String,
    pub segment: String,
    pub city: String,
    pub state: String,
    pub region: String,
    pub category: String,
    pub sub_category: String,
    pub quantity: u32,
    pub discount: f64,
    pub profit: f64,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    #[serde(flatten)]
    pub history: HistoricalMetrics,
}

impl OrderForm {
    /// Fresh form with both dates set to `today`.
    pub fn from_defaults(defaults: &FormDefaults, today: NaiveDate) -> Self {
        Self {
            ship_mode: defaults.ship_mode.clone(),
            segment: defaults.segment.clone(),
            city: defaults.city.clone(),
            state: defaults.state.clone(),
            region: defaults.region.clone(),
            category: defaults.category.clone(),
            sub_category: defaults.sub_category.clone(),
            quantity: defaults.quantity,
            discount: defaults.discount,
            profit: defaults.profit,
            order_date: today,
            ship_date: today,
            history: defaults.history.clone(),
        }
    }

    /// Parses a submitted form body. A body that does not fit the form
    /// (wrong type, negative quantity, malformed date) is a per-request
    /// input error, same as an out-of-range value.
    pub fn from_json(body: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(body)
            .map_err(|e| PredictionError::invalid("order form", e.to_string()))
    }

    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::ShipMode => &self.ship_mode,
            CategoricalField::Segment => &self.segment,
            CategoricalField::City => &self.city,
            CategoricalField::State => &self.state,
            CategoricalField::Region => &self.region,
            CategoricalField::Category => &self.category,
            CategoricalField::SubCategory => &self.sub_category,
        }
    }

    pub fn categorical_mut(&mut self, field: CategoricalField) -> &mut String {
        match field {
            CategoricalField::ShipMode => &mut self.ship_mode,
            CategoricalField::Segment => &mut self.segment,
            CategoricalField::City => &mut self.city,
            CategoricalField::State => &mut self.state,
            CategoricalField::Region => &mut self.region,
            CategoricalField::Category => &mut self.category,
            CategoricalField::SubCategory => &mut self.sub_category,
        }
    }

    /// Enforces the bounds the form widgets impose. Categorical labels are
    /// not checked against the choice lists, and the ship date may precede
    /// the order date.
    pub fn validate(&self) -> Result<(), PredictionError> {
        if !QUANTITY_RANGE.contains(&self.quantity) {
            return Err(PredictionError::invalid(
                "Quantity",
                format!(
                    "{} is outside {}..={}",
                    self.quantity,
                    QUANTITY_RANGE.start(),
                    QUANTITY_RANGE.end()
                ),
            ));
        }
        if !DISCOUNT_RANGE.contains(&self.discount) {
            return Err(PredictionError::invalid(
                "Discount",
                format!("{} is outside [0, 1]", self.discount),
            ));
        }
        if !PROFIT_RANGE.contains(&self.profit) {
            return Err(PredictionError::invalid(
                "Profit",
                format!("{} is outside [-1000, 1000]", self.profit),
            ));
        }
        for (name, value) in self.history.real_fields() {
            if !value.is_finite() {
                return Err(PredictionError::invalid(name, "must be a finite number"));
            }
        }
        Ok(())
    }
}
