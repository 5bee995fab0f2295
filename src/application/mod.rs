// Model loading and inference
pub mod ml;

// Request pipeline: collect, derive, encode, predict
pub mod prediction_service;

// Operator-facing result summaries
pub mod report;
