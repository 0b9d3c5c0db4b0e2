use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::future::try_join_all;
use reqwest::Client;
use tracing::debug;

use super::interface::{SynthesisError, TTSInterface};
use crate::language::TargetLanguage;
use crate::translate::interface::excerpt;
use crate::utils::sentence_divider::split_for_tts;

/// Google Translate text-to-speech (`translate_tts`, `client=tw-ob`).
///
/// The endpoint only accepts short texts, so longer input is split and the
/// MP3 payloads of each piece are concatenated in order.
pub struct GoogleTTS {
    client: Client,
    base_url: String,
    slow: bool,
    chunk_size: usize,
}

impl GoogleTTS {
    pub fn new(client: Client, base_url: impl Into<String>, slow: bool, chunk_size: usize) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            slow,
            chunk_size,
        }
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: TargetLanguage,
        idx: usize,
        total: usize,
    ) -> Result<Bytes, SynthesisError> {
        let url = format!("{}/translate_tts", self.base_url);
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let speed = if self.slow { "0.3" } else { "1" };

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("q", chunk),
                ("tl", lang.as_str()),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("ttsspeed", speed),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(audio)
    }
}

#[async_trait]
impl TTSInterface for GoogleTTS {
    fn name(&self) -> &'static str {
        "google_tts"
    }

    async fn synthesize(&self, text: &str, lang: TargetLanguage) -> Result<Bytes, SynthesisError> {
        let chunks = split_for_tts(text, self.chunk_size);
        if chunks.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let total = chunks.len();
        debug!("Requesting {} TTS chunk(s) for lang={}", total, lang);

        let parts = try_join_all(
            chunks
                .iter()
                .enumerate()
                .map(|(idx, chunk)| self.fetch_chunk(chunk, lang, idx, total)),
        )
        .await?;

        let mut audio = BytesMut::with_capacity(parts.iter().map(Bytes::len).sum());
        for part in parts {
            audio.extend_from_slice(&part);
        }
        Ok(audio.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn single_chunk_returns_backend_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", "ru"))
            .and(query_param("q", "Доброе утро"))
            .and(query_param("client", "tw-ob"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(b"ID3mp3".to_vec()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tts = GoogleTTS::new(Client::new(), server.uri(), false, 100);
        let audio = tts.synthesize("Доброе утро", TargetLanguage::Ru).await.unwrap();
        assert_eq!(&audio[..], b"ID3mp3");
    }

    #[tokio::test]
    async fn long_text_is_concatenated_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("idx", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"AAA".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("idx", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"BBB".to_vec()))
            .mount(&server)
            .await;

        let tts = GoogleTTS::new(Client::new(), server.uri(), false, 14);
        let audio = tts.synthesize("Good morning. Nice day.", TargetLanguage::En).await.unwrap();
        assert_eq!(&audio[..], b"AAABBB");
    }

    #[tokio::test]
    async fn slow_mode_lowers_speed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("ttsspeed", "0.3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let tts = GoogleTTS::new(Client::new(), server.uri(), true, 100);
        assert!(tts.synthesize("Hello", TargetLanguage::En).await.is_ok());
    }

    #[tokio::test]
    async fn backend_error_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tts = GoogleTTS::new(Client::new(), server.uri(), false, 100);
        let err = tts.synthesize("Hello", TargetLanguage::En).await.unwrap_err();
        assert!(matches!(err, SynthesisError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn empty_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let tts = GoogleTTS::new(Client::new(), server.uri(), false, 100);
        let err = tts.synthesize("Hello", TargetLanguage::En).await.unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyAudio));
    }
}
