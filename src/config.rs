use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
    #[serde(default)]
    pub tts_config: TTSConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for every outbound backend call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub cors_allow_credentials: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_true() -> bool {
    true
}

impl SystemConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_allow_credentials: true,
        }
    }
}

/// Configuration for translation services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_translate_provider")]
    pub translate_provider: String, // "google", "libretranslate"

    #[serde(default)]
    pub google: GoogleTranslateConfig,

    #[serde(default)]
    pub libretranslate: LibreTranslateConfig,
}

fn default_translate_provider() -> String {
    "google".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            translate_provider: default_translate_provider(),
            google: GoogleTranslateConfig::default(),
            libretranslate: LibreTranslateConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTranslateConfig {
    #[serde(default = "default_google_translate_url")]
    pub base_url: String,
}

fn default_google_translate_url() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Default for GoogleTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_translate_url(),
        }
    }
}

/// Configuration for a LibreTranslate-compatible REST endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreTranslateConfig {
    #[serde(default = "default_libretranslate_endpoint")]
    pub api_endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_libretranslate_endpoint() -> String {
    "http://localhost:5000".to_string()
}

impl LibreTranslateConfig {
    /// The key to send, if any. Blank keys and `${VAR}` references left
    /// unresolved by substitution count as no key.
    pub fn effective_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.contains("${"))
            .map(str::to_string)
    }
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_libretranslate_endpoint(),
            api_key: None,
        }
    }
}

/// Configuration for Text-to-Speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    #[serde(default)]
    pub google_tts: GoogleTTSConfig,
}

fn default_tts_model() -> String {
    "google_tts".to_string()
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            tts_model: default_tts_model(),
            google_tts: GoogleTTSConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTTSConfig {
    #[serde(default = "default_google_tts_url")]
    pub base_url: String,

    #[serde(default)]
    pub slow: bool,

    /// Longest piece of text sent in a single TTS request
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_google_tts_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_chunk_size() -> usize {
    100
}

impl Default for GoogleTTSConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_tts_url(),
            slow: false,
            chunk_size: default_chunk_size(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let bytes = fs::read(path)?;
        let (content, _) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        let content = substitute_env_vars(&content);

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.system_config.request_timeout_secs == 0 {
            anyhow::bail!("system_config.request_timeout_secs must be greater than 0");
        }
        if self.tts_config.google_tts.chunk_size == 0 {
            anyhow::bail!("tts_config.google_tts.chunk_size must be greater than 0");
        }
        Ok(())
    }
}

/// Replace environment variables: ${VAR_NAME}. Unknown variables are left as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex is valid");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let file = write_temp(
            ".yaml",
            b"translator_config:\n  translate_provider: libretranslate\n  libretranslate:\n    api_endpoint: http://lt:5000\n",
        );
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.translator_config.translate_provider, "libretranslate");
        assert_eq!(config.translator_config.libretranslate.api_endpoint, "http://lt:5000");
        assert_eq!(config.system_config.port, 8000);
        assert_eq!(config.system_config.request_timeout_secs, 15);
        assert_eq!(config.tts_config.tts_model, "google_tts");
        assert_eq!(config.tts_config.google_tts.chunk_size, 100);
    }

    #[test]
    fn json_with_bom_is_accepted() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(br#"{"system_config": {"port": 9100}}"#);
        let file = write_temp(".json", &content);
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.system_config.port, 9100);
        assert!(config.system_config.cors_allow_credentials);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("RUEN_BRIDGE_TEST_KEY", "secret");
        let out = substitute_env_vars("api_key: ${RUEN_BRIDGE_TEST_KEY} other: ${RUEN_BRIDGE_MISSING_VAR}");
        assert_eq!(out, "api_key: secret other: ${RUEN_BRIDGE_MISSING_VAR}");
    }

    #[test]
    fn unresolved_api_key_is_dropped() {
        let file = write_temp(
            ".yaml",
            b"translator_config:\n  libretranslate:\n    api_key: ${RUEN_BRIDGE_UNSET_API_KEY}\n",
        );
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        let libre = &config.translator_config.libretranslate;

        assert_eq!(libre.api_key.as_deref(), Some("${RUEN_BRIDGE_UNSET_API_KEY}"));
        assert_eq!(libre.effective_api_key(), None);
    }

    #[test]
    fn blank_api_key_is_dropped() {
        let mut libre = LibreTranslateConfig::default();
        libre.api_key = Some("  ".to_string());
        assert_eq!(libre.effective_api_key(), None);

        libre.api_key = Some("k123".to_string());
        assert_eq!(libre.effective_api_key(), Some("k123".to_string()));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let file = write_temp(".yaml", b"system_config:\n  request_timeout_secs: 0\n");
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/nonexistent/ruen-bridge.yaml").is_err());
    }
}
