//! Choice lists and input bounds offered by the order form.

use std::fmt;
use std::ops::RangeInclusive;

pub const SHIP_MODES: &[&str] = &["Standard Class", "Second Class", "First Class", "Same Day"];
pub const SEGMENTS: &[&str] = &["Consumer", "Corporate", "Home Office"];
pub const CITIES: &[&str] = &[
    "Los Angeles",
    "New York",
    "Seattle",
    "San Francisco",
    "Chicago",
];
pub const STATES: &[&str] = &["California", "New York", "Washington", "Illinois", "Texas"];
pub const REGIONS: &[&str] = &["West", "East", "Central", "South"];
pub const CATEGORIES: &[&str] = &["Furniture", "Office Supplies", "Technology"];
pub const SUB_CATEGORIES: &[&str] = &[
    "Chairs",
    "Tables",
    "Bookcases",
    "Phones",
    "Storage",
    "Furnishings",
    "Art",
    "Labels",
    "Binders",
    "Accessories",
];

pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=100;
pub const DISCOUNT_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const DISCOUNT_STEP: f64 = 0.05;
pub const PROFIT_RANGE: RangeInclusive<f64> = -1000.0..=1000.0;

/// The seven string-valued columns of the feature row, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    ShipMode,
    Segment,
    City,
    State,
    Region,
    Category,
    SubCategory,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 7] = [
        CategoricalField::ShipMode,
        CategoricalField::Segment,
        CategoricalField::City,
        CategoricalField::State,
        CategoricalField::Region,
        CategoricalField::Category,
        CategoricalField::SubCategory,
    ];

    /// Column name the model was trained with.
    pub fn column_name(&self) -> &'static str {
        match self {
            CategoricalField::ShipMode => "Ship Mode",
            CategoricalField::Segment => "Segment",
            CategoricalField::City => "City",
            CategoricalField::State => "State",
            CategoricalField::Region => "Region",
            CategoricalField::Category => "Category",
            CategoricalField::SubCategory => "Sub-Category",
        }
    }

    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            CategoricalField::ShipMode => SHIP_MODES,
            CategoricalField::Segment => SEGMENTS,
            CategoricalField::City => CITIES,
            CategoricalField::State => STATES,
            CategoricalField::Region => REGIONS,
            CategoricalField::Category => CATEGORIES,
            CategoricalField::SubCategory => SUB_CATEGORIES,
        }
    }

    pub fn default_choice(&self) -> &'static str {
        self.choices()[0]
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_choices() {
        for field in CategoricalField::ALL {
            assert!(!field.choices().is_empty(), "{} has no choices", field);
        }
    }

    #[test]
    fn test_defaults_are_first_choice() {
        assert_eq!(CategoricalField::ShipMode.default_choice(), "Standard Class");
        assert_eq!(CategoricalField::SubCategory.default_choice(), "Chairs");
    }

    #[test]
    fn test_discount_step_divides_range() {
        let steps = (DISCOUNT_RANGE.end() - DISCOUNT_RANGE.start()) / DISCOUNT_STEP;
        assert!((steps - steps.round()).abs() < 1e-9);
    }
}
