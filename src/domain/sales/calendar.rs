//! Calendar features derived from the order and ship dates.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Date-derived columns of the feature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFeatures {
    /// Monday = 0 ... Sunday = 6
    pub day_of_week: u32,
    pub month: u32,
    pub year: i32,
    pub quarter: u32,
    pub is_weekend: bool,
    /// Signed: a ship date before the order date yields a negative count.
    pub days_to_ship: i64,
}

impl CalendarFeatures {
    pub fn derive(order_date: NaiveDate, ship_date: NaiveDate) -> Self {
        let day_of_week = order_date.weekday().num_days_from_monday();
        let month = order_date.month();

        Self {
            day_of_week,
            month,
            year: order_date.year(),
            quarter: quarter_of(month),
            is_weekend: day_of_week >= 5,
            days_to_ship: (ship_date - order_date).num_days(),
        }
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week as usize]
    }

    pub fn weekend_label(&self) -> &'static str {
        if self.is_weekend { "Yes" } else { "No" }
    }
}

/// Calendar quarter (1-4). `month` must be 1-12, as `chrono` yields it.
fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}
