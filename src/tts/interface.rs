use async_trait::async_trait;
use bytes::Bytes;

use crate::language::TargetLanguage;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("speech backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("speech backend returned no audio")]
    EmptyAudio,
    #[error("nothing to synthesize")]
    EmptyText,
}

/// TTS interface trait - implemented by speech backends
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Short model name used in logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Synthesize `text` with a voice for `lang`, returning MP3 bytes held in memory
    async fn synthesize(&self, text: &str, lang: TargetLanguage) -> Result<Bytes, SynthesisError>;
}
