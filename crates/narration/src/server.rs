use std::time::Duration;

use wayfarer_config::NarrationConfig;

use crate::error::SynthesisError;
use crate::http_client::http_client;
use crate::provider::{SpeechProvider, elevenlabs::ElevenLabsProvider};
use crate::types::{OUTPUT_FORMAT, SpeechAudio, SpeechRequest};

/// Narration service: one configured synthesis provider plus the voice and
/// model every chapter is narrated with
pub struct Narrator {
    provider: Box<dyn SpeechProvider>,
    voice: String,
    model: String,
}

impl Narrator {
    /// Build the narrator from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &NarrationConfig) -> anyhow::Result<Self> {
        let client = http_client(Duration::from_secs(config.timeout_secs))?;
        let provider = ElevenLabsProvider::new(client, config.api_key.clone(), config.base_url.clone());

        Ok(Self {
            provider: Box::new(provider),
            voice: config.voice.clone(),
            model: config.model.clone(),
        })
    }

    /// Construct with an explicit provider, for tests
    pub fn with_provider(provider: Box<dyn SpeechProvider>, voice: String, model: String) -> Self {
        Self { provider, voice, model }
    }

    /// Synthesize narration audio for the given text
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError` when the provider call fails or yields no audio.
    pub async fn narrate(&self, text: &str) -> Result<SpeechAudio, SynthesisError> {
        let request = SpeechRequest {
            text: text.to_owned(),
            voice: self.voice.clone(),
            model: self.model.clone(),
            output_format: OUTPUT_FORMAT.to_owned(),
        };

        tracing::debug!(provider = %self.provider.name(), "narration requested");

        self.provider.synthesize(&request).await
    }
}
