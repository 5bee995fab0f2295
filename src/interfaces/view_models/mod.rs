pub mod form_view_model;

pub use form_view_model::FormViewModel;
