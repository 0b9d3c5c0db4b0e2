use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::language::TargetLanguage;

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Body of both `/translate` and `/speak`.
///
/// `target_lang` stays a free string: anything other than `en`/`ru` is
/// treated as absent rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default)]
    pub target_lang: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: Option<&str>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.map(str::to_string),
        }
    }

    /// Trimmed text, or `EmptyText` when nothing is left to translate
    pub fn validated_text(&self) -> Result<&str, PipelineError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyText);
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source_lang: String,
    pub target_lang: TargetLanguage,
    pub translated_text: String,
}

/// Synthesized speech; lives only for the duration of one response
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Bytes,
    pub mime_type: &'static str,
    pub suggested_filename: String,
}

impl AudioArtifact {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.suggested_filename)
    }
}
