use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config::TTSConfig;
use super::google_tts::GoogleTTS;
use super::interface::TTSInterface;

/// Factory for creating TTS engines/clients
pub struct TTSFactory;

impl TTSFactory {
    /// Create a TTS client based on configuration
    ///
    /// # Arguments
    /// * `tts_config` - TTS section of the application config
    /// * `client` - Shared HTTP client (carries the outbound timeout)
    pub fn create_tts(tts_config: &TTSConfig, client: Client) -> Result<Arc<dyn TTSInterface>> {
        info!("Initializing TTS engine: {}", tts_config.tts_model);

        match tts_config.tts_model.as_str() {
            "google_tts" | "gtts" => {
                let google = &tts_config.google_tts;
                Ok(Arc::new(GoogleTTS::new(
                    client,
                    google.base_url.clone(),
                    google.slow,
                    google.chunk_size,
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported TTS model: {}", other)),
        }
    }
}
