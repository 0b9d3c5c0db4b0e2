pub mod types;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::language::TargetLanguage;
use crate::translate::{LanguageResolver, TranslationGateway, SOURCE_AUTO};
use crate::tts::SpeechSynthesizer;
use self::types::{AudioArtifact, TranslationRequest, TranslationResult};

/// Resolve → translate → (speak). One instance serves every request; it holds
/// no per-request state.
#[derive(Clone)]
pub struct TranslationPipeline {
    resolver: LanguageResolver,
    gateway: TranslationGateway,
    synthesizer: SpeechSynthesizer,
}

impl TranslationPipeline {
    pub fn new(
        resolver: LanguageResolver,
        gateway: TranslationGateway,
        synthesizer: SpeechSynthesizer,
    ) -> Self {
        Self {
            resolver,
            gateway,
            synthesizer,
        }
    }

    pub fn translate_provider(&self) -> &'static str {
        self.gateway.provider()
    }

    pub fn tts_model(&self) -> &'static str {
        self.synthesizer.model()
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, PipelineError> {
        let text = request.validated_text()?;
        let (target_lang, translated_text) = self.resolve_and_translate(text, request).await?;

        info!("Translated request to {}", target_lang);
        Ok(TranslationResult {
            source_lang: SOURCE_AUTO.to_string(),
            target_lang,
            translated_text,
        })
    }

    /// Speech is always produced from the translated text in the resolved language.
    pub async fn speak(&self, request: &TranslationRequest) -> Result<AudioArtifact, PipelineError> {
        let text = request.validated_text()?;
        let (target_lang, translated_text) = self.resolve_and_translate(text, request).await?;

        let artifact = self.synthesizer.synthesize(&translated_text, target_lang).await?;
        info!("Synthesized speech {}", artifact.suggested_filename);
        Ok(artifact)
    }

    async fn resolve_and_translate(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> Result<(TargetLanguage, String), PipelineError> {
        let target_lang = self
            .resolver
            .resolve(text, request.target_lang.as_deref())
            .await;
        debug!("Language resolved: {}", target_lang);

        let translated = self.gateway.translate(text, target_lang).await?;
        Ok((target_lang, translated))
    }
}
