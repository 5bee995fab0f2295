pub mod calendar;
pub mod catalog;
pub mod order;

pub use calendar::CalendarFeatures;
pub use catalog::CategoricalField;
pub use order::{FormDefaults, HistoricalMetrics, OrderForm};
