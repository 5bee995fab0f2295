//! Summaries echoed back to the operator after a submission.

use crate::domain::ml::{EncodedFeatureRow, FeatureRow};
use crate::domain::sales::OrderForm;
use serde::Serialize;
use std::fmt;

pub const FAILURE_HINT: &str = "Please check if all input values are within expected ranges.";

pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Fraction as a percentage with one decimal, e.g. 0.2 -> "20.0%".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Discount")]
    pub discount: String,
    #[serde(rename = "Profit")]
    pub profit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingDetails {
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "Ship Date")]
    pub ship_date: String,
    #[serde(rename = "Days to Ship")]
    pub days_to_ship: i64,
    #[serde(rename = "Quarter")]
    pub quarter: u32,
    #[serde(rename = "Is Weekend")]
    pub is_weekend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDetails {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Ship Mode")]
    pub ship_mode: String,
    #[serde(rename = "Segment")]
    pub segment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub prediction: f64,
    pub predictor: String,
    pub order_details: OrderDetails,
    pub timing_details: TimingDetails,
    pub location_details: LocationDetails,
    pub features: Vec<String>,
    pub encoded: EncodedFeatureRow,
}

impl PredictionReport {
    pub fn new(
        form: &OrderForm,
        row: &FeatureRow,
        encoded: EncodedFeatureRow,
        prediction: f64,
        predictor: &str,
    ) -> Self {
        Self {
            prediction,
            predictor: predictor.to_string(),
            order_details: OrderDetails {
                category: row.category.clone(),
                sub_category: row.sub_category.clone(),
                quantity: row.quantity,
                discount: format_percent(row.discount),
                profit: format_currency(row.profit),
            },
            timing_details: TimingDetails {
                order_date: form.order_date.format("%Y-%m-%d").to_string(),
                ship_date: form.ship_date.format("%Y-%m-%d").to_string(),
                days_to_ship: row.calendar.days_to_ship,
                quarter: row.calendar.quarter,
                is_weekend: row.calendar.weekend_label().to_string(),
            },
            location_details: LocationDetails {
                city: row.city.clone(),
                state: row.state.clone(),
                region: row.region.clone(),
                ship_mode: row.ship_mode.clone(),
                segment: row.segment.clone(),
            },
            features: encoded.columns().map(|(name, _)| name.to_string()).collect(),
            encoded,
        }
    }

    pub fn headline(&self) -> String {
        format!("Predicted Sales: {}", format_currency(self.prediction))
    }

    /// Label/value pairs per section, in display order.
    pub fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        let o = &self.order_details;
        let t = &self.timing_details;
        let l = &self.location_details;
        vec![
            (
                "Order Details",
                vec![
                    ("Category", o.category.clone()),
                    ("Sub-Category", o.sub_category.clone()),
                    ("Quantity", o.quantity.to_string()),
                    ("Discount", o.discount.clone()),
                    ("Profit", o.profit.clone()),
                ],
            ),
            (
                "Timing Details",
                vec![
                    ("Order Date", t.order_date.clone()),
                    ("Ship Date", t.ship_date.clone()),
                    ("Days to Ship", t.days_to_ship.to_string()),
                    ("Quarter", t.quarter.to_string()),
                    ("Is Weekend", t.is_weekend.clone()),
                ],
            ),
            (
                "Location Details",
                vec![
                    ("City", l.city.clone()),
                    ("State", l.state.clone()),
                    ("Region", l.region.clone()),
                    ("Ship Mode", l.ship_mode.clone()),
                    ("Segment", l.segment.clone()),
                ],
            ),
        ]
    }
}

impl fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f)?;
        writeln!(f, "Input Summary")?;
        for (title, entries) in self.sections() {
            writeln!(f, "{}:", title)?;
            for (label, value) in entries {
                writeln!(f, "  {:<14} {}", label, value)?;
            }
        }
        writeln!(f, "Debug Information:")?;
        write!(f, "  Features used: {}", self.features.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub message: String,
    /// Empty when the submission failed before a row was assembled.
    pub columns: Vec<String>,
    pub hint: String,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "Debug information:")?;
        writeln!(f, "  Input data columns: [{}]", self.columns.join(", "))?;
        write!(f, "{}", self.hint)
    }
}

/// What the display layer renders for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success(PredictionReport),
    Failure(FailureReport),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Success(report) => fmt::Display::fmt(report, f),
            SubmissionOutcome::Failure(report) => fmt::Display::fmt(report, f),
        }
    }
}
