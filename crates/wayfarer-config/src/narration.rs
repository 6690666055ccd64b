use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech synthesis backend configuration
///
/// Targets the ElevenLabs text-to-speech API.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NarrationConfig {
    /// API key, required at startup
    pub api_key: SecretString,
    /// Voice identifier used for all narration
    pub voice: String,
    /// Synthesis model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override, for tests and proxies
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "eleven_multilingual_v2".to_owned()
}

const fn default_timeout_secs() -> u64 {
    60
}
