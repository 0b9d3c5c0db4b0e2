//! Translate interface - implemented by the HTTP translation backends

use async_trait::async_trait;

use crate::language::TargetLanguage;

/// Source language sent to every backend; detection is left to the provider.
pub const SOURCE_AUTO: &str = "auto";

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("detection request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("detection backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed detection response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("translation backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
    #[error("translation backend error: {0}")]
    Backend(String),
}

/// Capabilities every translation backend exposes
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Short provider name used in logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Detect the language of `text`, returning the provider's language code
    async fn detect(&self, text: &str) -> Result<String, DetectionError>;

    /// Translate `text` from an auto-detected source into `target`
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError>;
}

/// Shorten an upstream error body so it can travel inside an error message.
pub(crate) fn excerpt(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
