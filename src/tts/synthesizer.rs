use chrono::{DateTime, Local};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, error};

use super::interface::{SynthesisError, TTSInterface};
use crate::language::TargetLanguage;
use crate::pipeline::types::{AudioArtifact, AUDIO_MPEG};

/// Source of the 4-digit filename suffix
pub trait SuffixSource: Send + Sync {
    /// A value in `1000..=9999`
    fn next_suffix(&self) -> u16;
}

/// Uniform suffix drawn from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> u16 {
        rand::rng().random_range(1000..=9999)
    }
}

/// `speech_{lang}_{YYYYMMDD_HHMMSS}_{suffix}.mp3`
///
/// Advisory only: two calls within the same second can collide.
pub fn speech_filename(lang: TargetLanguage, at: DateTime<Local>, suffix: u16) -> String {
    format!("speech_{}_{}_{}.mp3", lang, at.format("%Y%m%d_%H%M%S"), suffix)
}

/// Turns translated text into a downloadable in-memory MP3
#[derive(Clone)]
pub struct SpeechSynthesizer {
    tts: Arc<dyn TTSInterface>,
    suffix: Arc<dyn SuffixSource>,
}

impl SpeechSynthesizer {
    pub fn new(tts: Arc<dyn TTSInterface>, suffix: Arc<dyn SuffixSource>) -> Self {
        Self { tts, suffix }
    }

    pub fn model(&self) -> &'static str {
        self.tts.name()
    }

    pub async fn synthesize(
        &self,
        text: &str,
        lang: TargetLanguage,
    ) -> Result<AudioArtifact, SynthesisError> {
        let bytes = self.tts.synthesize(text, lang).await.map_err(|e| {
            error!("Speech synthesis via {} failed: {}", self.tts.name(), e);
            e
        })?;

        let suggested_filename = speech_filename(lang, Local::now(), self.suffix.next_suffix());
        debug!("Synthesized {} bytes as {}", bytes.len(), suggested_filename);

        Ok(AudioArtifact {
            bytes,
            mime_type: AUDIO_MPEG,
            suggested_filename,
        })
    }
}
