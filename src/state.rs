use std::sync::Arc;
use reqwest::Client;

use crate::config::Config;
use crate::pipeline::TranslationPipeline;
use crate::translate::{LanguageResolver, TranslationGateway, TranslatorFactory};
use crate::tts::{RandomSuffix, SpeechSynthesizer, TTSFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<TranslationPipeline>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // One client for every backend so connections are pooled
        let client = Client::builder()
            .timeout(config.system_config.request_timeout())
            .build()?;

        let translator = TranslatorFactory::create_translator(&config.translator_config, client.clone())?;
        let tts = TTSFactory::create_tts(&config.tts_config, client)?;

        let pipeline = TranslationPipeline::new(
            LanguageResolver::new(translator.clone()),
            TranslationGateway::new(translator),
            SpeechSynthesizer::new(tts, Arc::new(RandomSuffix)),
        );

        Ok(Self::with_pipeline(config, pipeline))
    }

    pub fn with_pipeline(config: Config, pipeline: TranslationPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
