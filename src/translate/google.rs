use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{excerpt, DetectionError, TranslationError, TranslatorInterface, SOURCE_AUTO};
use crate::language::TargetLanguage;

/// Google web translation endpoint (`translate_a/single`, `client=gtx`).
///
/// The response is a positional JSON array:
/// `[[["<translated>", "<original>", ...], ...], null, "<detected source>", ...]`
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn query(&self, text: &str, target: &str) -> Result<(u16, String), reqwest::Error> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_AUTO),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Concatenate every translated fragment from the first element of the payload.
fn extract_translation(payload: &Value) -> Result<String, TranslationError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse("missing segment list".to_string()))?;

    let fragments: Vec<&str> = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if fragments.is_empty() {
        return Err(TranslationError::MalformedResponse(
            "no translated fragments".to_string(),
        ));
    }
    Ok(fragments.concat())
}

fn extract_detected_language(payload: &Value) -> Result<String, DetectionError> {
    payload
        .get(2)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DetectionError::MalformedResponse("missing detected language".to_string()))
}

#[async_trait]
impl TranslatorInterface for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn detect(&self, text: &str) -> Result<String, DetectionError> {
        let (status, body) = self.query(text, TargetLanguage::En.as_str()).await?;
        if !(200..300).contains(&status) {
            return Err(DetectionError::Status {
                status,
                body: excerpt(&body),
            });
        }
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| DetectionError::MalformedResponse(e.to_string()))?;
        let detected = extract_detected_language(&payload)?;
        debug!("Google detected language: {}", detected);
        Ok(detected)
    }

    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        let (status, body) = self.query(text, target.as_str()).await?;
        if !(200..300).contains(&status) {
            return Err(TranslationError::Status {
                status,
                body: excerpt(&body),
            });
        }
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;
        extract_translation(&payload)
    }
}
