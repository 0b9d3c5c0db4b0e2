//! In-memory speech backend used by unit tests across the crate.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;

use super::interface::{SynthesisError, TTSInterface};
use super::synthesizer::SuffixSource;
use crate::language::TargetLanguage;

pub struct FixedSuffix(pub u16);

impl SuffixSource for FixedSuffix {
    fn next_suffix(&self) -> u16 {
        self.0
    }
}

#[derive(Default)]
pub struct MockTTS {
    fails: bool,
    calls: Mutex<Vec<(String, TargetLanguage)>>,
}

impl MockTTS {
    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, TargetLanguage)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TTSInterface for MockTTS {
    fn name(&self) -> &'static str {
        "mock_tts"
    }

    async fn synthesize(&self, text: &str, lang: TargetLanguage) -> Result<Bytes, SynthesisError> {
        self.calls.lock().unwrap().push((text.to_string(), lang));
        if self.fails {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(Bytes::from(format!("mp3:{}:{}", lang, text)))
    }
}
