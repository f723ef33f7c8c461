//! Placeholder inference module.

pub mod engine;
pub mod types;

pub use engine::{InferenceEngine, LengthRanker, Predictor};
pub use types::{effective_top_k, PredictError, PredictRequest, PredictResponse, ScoredToken};
