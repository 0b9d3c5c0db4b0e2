use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config::TranslatorConfig;
use super::google::GoogleTranslator;
use super::interface::TranslatorInterface;
use super::libre::LibreTranslator;

/// Factory for creating translation backends
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on configuration
    ///
    /// # Arguments
    /// * `config` - Translator section of the application config
    /// * `client` - Shared HTTP client (carries the outbound timeout)
    pub fn create_translator(
        config: &TranslatorConfig,
        client: Client,
    ) -> Result<Arc<dyn TranslatorInterface>> {
        info!("Initializing translator: {}", config.translate_provider);

        match config.translate_provider.as_str() {
            "google" => Ok(Arc::new(GoogleTranslator::new(
                client,
                config.google.base_url.clone(),
            ))),
            "libretranslate" | "libre" => Ok(Arc::new(LibreTranslator::new(
                client,
                config.libretranslate.api_endpoint.clone(),
                config.libretranslate.effective_api_key(),
            ))),
            other => Err(anyhow::anyhow!("Unsupported translate provider: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_backend_by_name() {
        let mut config = TranslatorConfig::default();
        let google = TranslatorFactory::create_translator(&config, Client::new()).unwrap();
        assert_eq!(google.name(), "google");

        config.translate_provider = "libretranslate".to_string();
        let libre = TranslatorFactory::create_translator(&config, Client::new()).unwrap();
        assert_eq!(libre.name(), "libretranslate");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let config = TranslatorConfig {
            translate_provider: "deepl".to_string(),
            ..TranslatorConfig::default()
        };
        assert!(TranslatorFactory::create_translator(&config, Client::new()).is_err());
    }
}
