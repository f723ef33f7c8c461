//! Prediction request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request payload for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    /// Free text to rank. Must contain something other than whitespace.
    pub text: String,
    /// Number of tokens to return. Missing, null, or non-positive means 1.
    #[serde(default)]
    pub top_k: Option<i64>,
}

/// A token paired with its score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredToken {
    pub token: String,
    pub score: f64,
}

/// Response payload for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    /// The trimmed input text.
    pub input: String,
    /// The top_k actually applied.
    pub top_k: usize,
    /// Tokens in descending score order.
    pub predictions: Vec<ScoredToken>,
}

/// Errors that can occur while serving a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// The request carried no usable text.
    #[error("{0}")]
    InvalidInput(String),
}

pub type PredictResult<T> = Result<T, PredictError>;

/// Clamp a requested top_k to at least one.
pub fn effective_top_k(requested: Option<i64>) -> usize {
    match requested {
        Some(k) if k > 0 => usize::try_from(k).unwrap_or(usize::MAX),
        _ => 1,
    }
}
