pub mod elevenlabs;

use async_trait::async_trait;

use crate::error::SynthesisError;
use crate::types::{SpeechAudio, SpeechRequest};

/// Trait for speech synthesis provider implementations
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechAudio, SynthesisError>;

    /// Get the provider name
    fn name(&self) -> &str;
}
