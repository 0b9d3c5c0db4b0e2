//! In-memory translator used by unit tests across the crate.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::interface::{DetectionError, TranslationError, TranslatorInterface};
use crate::language::TargetLanguage;

pub struct MockTranslator {
    detected: Option<String>,
    translation_fails: bool,
    detect_calls: AtomicUsize,
    translate_calls: AtomicUsize,
}

impl MockTranslator {
    pub fn detecting(code: &str) -> Self {
        Self {
            detected: Some(code.to_string()),
            translation_fails: false,
            detect_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_detection() -> Self {
        Self {
            detected: None,
            ..Self::detecting("")
        }
    }

    pub fn failing_translation(mut self) -> Self {
        self.translation_fails = true;
        self
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslatorInterface for MockTranslator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn detect(&self, _text: &str) -> Result<String, DetectionError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detected
            .clone()
            .ok_or_else(|| DetectionError::MalformedResponse("detector offline".to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        if self.translation_fails {
            return Err(TranslationError::Backend("backend unavailable".to_string()));
        }
        Ok(format!("[{}] {}", target, text))
    }
}
