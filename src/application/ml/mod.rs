pub mod model_loader;
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_loader::load_predictor;
pub use predictor::SalesPredictor;
