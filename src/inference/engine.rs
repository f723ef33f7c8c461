//! Placeholder ranking model and the engine that drives it.

use std::sync::Arc;

use crate::inference::types::{
    effective_top_k, PredictError, PredictRequest, PredictResponse, PredictResult, ScoredToken,
};

/// A model that scores the tokens of a text.
///
/// Implementations must be deterministic for a given input and return at
/// most `top_k` tokens in descending score order.
pub trait Predictor: Send + Sync {
    /// Name used in logs and metrics.
    fn name(&self) -> &str;

    /// Score `text` and return the best `top_k` tokens.
    fn predict(&self, text: &str, top_k: usize) -> Vec<ScoredToken>;
}

/// Scores each whitespace-delimited token by its character length.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRanker;

impl Predictor for LengthRanker {
    fn name(&self) -> &str {
        "length-ranker"
    }

    fn predict(&self, text: &str, top_k: usize) -> Vec<ScoredToken> {
        let mut tokens: Vec<(&str, usize)> = text
            .split_whitespace()
            .map(|t| (t, t.chars().count()))
            .collect();

        // sort_by is stable: equal lengths keep input order
        tokens.sort_by(|a, b| b.1.cmp(&a.1));

        tokens
            .into_iter()
            .take(top_k.max(1))
            .map(|(token, len)| ScoredToken {
                token: token.to_string(),
                score: len as f64,
            })
            .collect()
    }
}

/// Validates requests and runs them through a [`Predictor`].
#[derive(Clone)]
pub struct InferenceEngine {
    model: Arc<dyn Predictor>,
}

impl InferenceEngine {
    /// Create an engine around the given model.
    pub fn new(model: Arc<dyn Predictor>) -> Self {
        Self { model }
    }

    /// Name of the underlying model.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Validate `request` and produce a ranked response.
    pub fn run(&self, request: &PredictRequest) -> PredictResult<PredictResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(PredictError::InvalidInput("text must not be empty".to_string()));
        }

        let top_k = effective_top_k(request.top_k);
        let predictions = self.model.predict(text, top_k);

        Ok(PredictResponse {
            input: text.to_string(),
            top_k,
            predictions,
        })
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(Arc::new(LengthRanker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, top_k: Option<i64>) -> PredictRequest {
        PredictRequest {
            text: text.to_string(),
            top_k,
        }
    }

    fn tokens(response: &PredictResponse) -> Vec<(&str, f64)> {
        response
            .predictions
            .iter()
            .map(|p| (p.token.as_str(), p.score))
            .collect()
    }

    #[test]
    fn ranks_by_length_descending() {
        let engine = InferenceEngine::default();
        let response = engine.run(&request("a bb ccc", Some(2))).unwrap();

        assert_eq!(response.input, "a bb ccc");
        assert_eq!(response.top_k, 2);
        assert_eq!(tokens(&response), vec![("ccc", 3.0), ("bb", 2.0)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let engine = InferenceEngine::default();
        let response = engine.run(&request("dog cat a emu", Some(3))).unwrap();
        assert_eq!(tokens(&response), vec![("dog", 3.0), ("cat", 3.0), ("emu", 3.0)]);
    }

    #[test]
    fn non_positive_top_k_returns_one() {
        let engine = InferenceEngine::default();
        for k in [None, Some(0), Some(-4)] {
            let response = engine.run(&request("short longest", k)).unwrap();
            assert_eq!(response.top_k, 1);
            assert_eq!(tokens(&response), vec![("longest", 7.0)]);
        }
    }

    #[test]
    fn top_k_larger_than_token_count() {
        let engine = InferenceEngine::default();
        let response = engine.run(&request("one two", Some(10))).unwrap();
        assert_eq!(response.top_k, 10);
        assert_eq!(response.predictions.len(), 2);
    }

    #[test]
    fn input_is_trimmed() {
        let engine = InferenceEngine::default();
        let response = engine.run(&request("  \thello world \n", None)).unwrap();
        assert_eq!(response.input, "hello world");
    }

    #[test]
    fn empty_or_whitespace_is_invalid() {
        let engine = InferenceEngine::default();
        for text in ["", "   ", "\n\t "] {
            let err = engine.run(&request(text, Some(3))).unwrap_err();
            assert_eq!(err, PredictError::InvalidInput("text must not be empty".into()));
        }
    }

    #[test]
    fn scores_count_characters_not_bytes() {
        let ranker = LengthRanker;
        let out = ranker.predict("héllo abcd", 2);
        assert_eq!(out[0].token, "héllo");
        assert_eq!(out[0].score, 5.0);
    }

    #[test]
    fn custom_predictor_is_used() {
        struct Fixed;
        impl Predictor for Fixed {
            fn name(&self) -> &str {
                "fixed"
            }
            fn predict(&self, _text: &str, _top_k: usize) -> Vec<ScoredToken> {
                vec![ScoredToken { token: "x".into(), score: 0.5 }]
            }
        }

        let engine = InferenceEngine::new(Arc::new(Fixed));
        assert_eq!(engine.model_name(), "fixed");
        let response = engine.run(&request("anything", None)).unwrap();
        assert_eq!(tokens(&response), vec![("x", 0.5)]);
    }
}
