use std::sync::Arc;
use tracing::{debug, error};

use super::interface::{TranslationError, TranslatorInterface};
use crate::language::TargetLanguage;

/// Single-attempt translation through the configured backend.
///
/// No retries and no caching: the outbound call is bounded by the shared
/// client's timeout and its failure goes straight back to the caller.
#[derive(Clone)]
pub struct TranslationGateway {
    translator: Arc<dyn TranslatorInterface>,
}

impl TranslationGateway {
    pub fn new(translator: Arc<dyn TranslatorInterface>) -> Self {
        Self { translator }
    }

    pub fn provider(&self) -> &'static str {
        self.translator.name()
    }

    pub async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        match self.translator.translate(text, target).await {
            Ok(translated) => {
                debug!(
                    "Translated {} chars to {} via {}",
                    text.chars().count(),
                    target,
                    self.translator.name()
                );
                Ok(translated)
            }
            Err(e) => {
                error!("Translation via {} failed: {}", self.translator.name(), e);
                Err(e)
            }
        }
    }
}
