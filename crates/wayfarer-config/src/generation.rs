use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Itinerary generation backend configuration
///
/// Targets the Google Generative Language `generateContent` API.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// API key, required at startup
    pub api_key: SecretString,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override, for tests and proxies
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum output tokens per generation
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra attempts after a transient upstream failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff delay in milliseconds, doubled per attempt
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_owned()
}

const fn default_temperature() -> f64 {
    0.7
}

const fn default_max_output_tokens() -> u32 {
    1500
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_retry_base_delay_ms() -> u64 {
    250
}
