use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::interface::{excerpt, DetectionError, TranslationError, TranslatorInterface, SOURCE_AUTO};
use crate::language::TargetLanguage;

/// Self-hosted LibreTranslate-compatible REST backend (`/detect`, `/translate`)
pub struct LibreTranslator {
    client: Client,
    api_endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
    #[serde(default)]
    confidence: f64,
}

impl LibreTranslator {
    pub fn new(client: Client, api_endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_endpoint: api_endpoint.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn form<'a>(&'a self, mut fields: Vec<(&'a str, &'a str)>) -> Vec<(&'a str, &'a str)> {
        if let Some(key) = self.api_key.as_deref() {
            fields.push(("api_key", key));
        }
        fields
    }
}

/// Pull `translatedText` out of the body, surfacing an `error` field if the
/// backend sent one instead.
fn extract_translated_text(payload: &Value) -> Result<String, TranslationError> {
    if let Some(text) = payload.get("translatedText").and_then(Value::as_str) {
        return Ok(text.to_string());
    }
    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return Err(TranslationError::Backend(message.to_string()));
    }
    Err(TranslationError::MalformedResponse(
        "missing translatedText field".to_string(),
    ))
}

#[async_trait]
impl TranslatorInterface for LibreTranslator {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    async fn detect(&self, text: &str) -> Result<String, DetectionError> {
        let url = format!("{}/detect", self.api_endpoint);
        let response = self
            .client
            .post(&url)
            .form(&self.form(vec![("q", text)]))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DetectionError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let detections: Vec<Detection> = response
            .json()
            .await
            .map_err(|e| DetectionError::MalformedResponse(e.to_string()))?;

        // Results arrive ordered by confidence
        let best = detections
            .into_iter()
            .next()
            .ok_or_else(|| DetectionError::MalformedResponse("empty detection list".to_string()))?;
        debug!("LibreTranslate detected {} ({:.1})", best.language, best.confidence);
        Ok(best.language)
    }

    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        let url = format!("{}/translate", self.api_endpoint);
        let response = self
            .client
            .post(&url)
            .form(&self.form(vec![
                ("q", text),
                ("source", SOURCE_AUTO),
                ("target", target.as_str()),
                ("format", "text"),
            ]))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // LibreTranslate reports failures as {"error": "..."}
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| excerpt(&body));
            return Err(TranslationError::Status {
                status: status.as_u16(),
                body: message,
            });
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;
        extract_translated_text(&payload)
    }
}
