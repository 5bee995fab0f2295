use super::feature_registry::{FEATURE_COUNT, FEATURE_NAMES};
use super::label_encoder::LabelEncoder;
use crate::domain::errors::PredictionError;
use crate::domain::sales::{CalendarFeatures, CategoricalField, HistoricalMetrics, OrderForm};
use serde::Serialize;

/// One request's worth of model input, before categorical encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
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
    pub calendar: CalendarFeatures,
    pub history: HistoricalMetrics,
}

impl FeatureRow {
    /// Derives the calendar columns and passes every other field through.
    pub fn assemble(form: &OrderForm) -> Self {
        Self {
            ship_mode: form.ship_mode.clone(),
            segment: form.segment.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            region: form.region.clone(),
            category: form.category.clone(),
            sub_category: form.sub_category.clone(),
            quantity: form.quantity,
            discount: form.discount,
            profit: form.profit,
            calendar: CalendarFeatures::derive(form.order_date, form.ship_date),
            history: form.history.clone(),
        }
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

    /// Label-encodes each categorical column with an encoder fitted on this
    /// row alone, so every categorical code comes out as 0.
    // TODO: swap in the vocabulary the model was trained with once it ships
    // alongside the artifact; until then the categorical inputs are inert.
    pub fn encode(&self) -> Result<EncodedFeatureRow, PredictionError> {
        let mut values = [0.0; FEATURE_COUNT];

        for (slot, field) in values.iter_mut().zip(CategoricalField::ALL) {
            let column = [self.categorical(field)];
            let codes = LabelEncoder::new()
                .fit_transform(&column)
                .map_err(|e| PredictionError::Encoding {
                    column: field.column_name().to_string(),
                    reason: e.to_string(),
                })?;
            *slot = codes[0] as f64;
        }

        let cal = &self.calendar;
        let h = &self.history;
        let numeric = [
            self.quantity as f64,
            self.discount,
            self.profit,
            cal.day_of_week as f64,
            cal.month as f64,
            cal.year as f64,
            cal.quarter as f64,
            if cal.is_weekend { 1.0 } else { 0.0 },
            cal.days_to_ship as f64,
            h.total_quantity_ordered,
            h.total_sales_by_product,
            h.avg_profit_by_product,
            h.total_orders_by_customer as f64,
            h.avg_order_value_customer,
            h.total_sales_by_customer,
            h.region_total_sales,
            h.region_avg_sales,
        ];
        values[CategoricalField::ALL.len()..].copy_from_slice(&numeric);

        Ok(EncodedFeatureRow { values })
    }
}

/// Fully numeric row in trained column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EncodedFeatureRow {
    values: [f64; FEATURE_COUNT],
}

impl EncodedFeatureRow {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|name| *name == column)
            .map(|idx| self.values[idx])
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}
