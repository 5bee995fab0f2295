pub mod feature_registry;
pub mod feature_row;
pub mod label_encoder;

pub use feature_registry::{CATEGORICAL_FEATURES, FEATURE_COUNT, FEATURE_NAMES};
pub use feature_row::{EncodedFeatureRow, FeatureRow};
pub use label_encoder::{EncoderError, LabelEncoder};
