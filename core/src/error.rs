//! Error taxonomy for the decomposition engine.

use thiserror::Error;

/// Errors surfaced to callers of `Engine::decompose`.
///
/// Internal "no match" outcomes are not errors: they are represented by
/// the empty-hypothesis branch or by pruning a combination whose
/// residual root would be empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// The requested part of speech has no pipeline variant.
    #[error("unsupported part of speech: {0}")]
    UnsupportedPartOfSpeech(String),

    /// The input word was empty after trimming.
    #[error("cannot decompose an empty word")]
    DegenerateInput,

    /// The hypothesis search exceeded the configured ceiling.
    #[error("hypothesis limit exceeded ({limit})")]
    HypothesisLimit { limit: usize },
}
