use std::sync::Arc;
use tracing::{debug, warn};

use super::interface::{DetectionError, TranslatorInterface};
use crate::language::TargetLanguage;

/// Picks the target language for a request.
///
/// An explicit `en`/`ru` override always wins and skips detection. Otherwise
/// the backend's detector decides: Russian input is translated to English,
/// anything else to Russian. Detection is best-effort; a failed detection
/// resolves to [`LanguageResolver::FALLBACK`] and is only logged.
#[derive(Clone)]
pub struct LanguageResolver {
    translator: Arc<dyn TranslatorInterface>,
}

impl LanguageResolver {
    pub const FALLBACK: TargetLanguage = TargetLanguage::En;

    pub fn new(translator: Arc<dyn TranslatorInterface>) -> Self {
        Self { translator }
    }

    pub async fn resolve(&self, text: &str, explicit_target: Option<&str>) -> TargetLanguage {
        if let Some(lang) = TargetLanguage::from_explicit(explicit_target) {
            debug!("Using explicit target language: {}", lang);
            return lang;
        }

        match self.detect_target(text).await {
            Ok(lang) => lang,
            Err(e) => {
                warn!(
                    "Language detection via {} failed, defaulting to {}: {}",
                    self.translator.name(),
                    Self::FALLBACK,
                    e
                );
                Self::FALLBACK
            }
        }
    }

    async fn detect_target(&self, text: &str) -> Result<TargetLanguage, DetectionError> {
        let detected = self.translator.detect(text).await?;
        let target = TargetLanguage::opposite_of_detected(&detected);
        debug!("Detected '{}', resolved target language: {}", detected, target);
        Ok(target)
    }
}
