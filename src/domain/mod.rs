// Order and calendar domain
pub mod sales;

// Feature schema and encoding
pub mod ml;

// Domain-specific error types
pub mod errors;
