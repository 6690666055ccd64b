use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::SpeechProvider;
use crate::error::SynthesisError;
use crate::types::{SpeechAudio, SpeechRequest};

/// Default ElevenLabs API base URL
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// ElevenLabs speech synthesis provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl ElevenLabsProvider {
    pub fn new(client: Client, api_key: SecretString, base_url: Option<Url>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_BASE_URL.to_owned(),
            |url| url.as_str().trim_end_matches('/').to_owned(),
        );

        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechAudio, SynthesisError> {
        let url = format!(
            "{}/text-to-speech/{}?output_format={}",
            self.base_url, request.voice, request.output_format
        );

        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            input_len = request.text.len(),
            "synthesis request"
        );

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &request.model,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "synthesis request failed");
                SynthesisError::Transport(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_owned());
            tracing::error!(status = %status, "synthesis backend returned error");

            return Err(match status.as_u16() {
                401 | 403 => SynthesisError::AuthenticationFailed(error_text),
                400 | 422 => SynthesisError::InvalidRequest(error_text),
                _ => SynthesisError::ProviderApi {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_owned();

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Payload(e.to_string()))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::debug!(bytes = audio.len(), "synthesis complete");

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
