//! Error types for the advisory core
//!
//! Scoring itself never fails. Errors only originate from injected models
//! (missing, misbehaving) and from configuration loading.

use thiserror::Error;

/// Errors surfaced by model-backed predictors
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No model was supplied for a predictor that has no heuristic fallback
    #[error("{0} model not available")]
    ModelUnavailable(&'static str),

    /// The injected model returned an error or an unusable output
    #[error("prediction failed: {0}")]
    Prediction(String),

    /// The model produced an empty probability vector
    #[error("model returned no class probabilities")]
    EmptyOutput,

    /// Class index map could not be parsed
    #[error("invalid class index: {0}")]
    ClassIndex(String),
}

pub type AdvisorResult<T> = std::result::Result<T, AdvisorError>;
