use thiserror::Error;

use crate::translate::TranslationError;
use crate::tts::SynthesisError;

/// Terminal failure states of a request.
///
/// Detection failures never appear here: the resolver recovers them.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Empty text")]
    EmptyText,

    #[error("Translate failed: {0}")]
    Translation(#[from] TranslationError),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl PipelineError {
    /// Whether the failure came from a backend rather than the caller
    pub fn is_upstream(&self) -> bool {
        !matches!(self, PipelineError::EmptyText)
    }
}
