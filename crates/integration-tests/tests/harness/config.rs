//! Programmatic configuration builder for integration tests

use secrecy::SecretString;
use wayfarer_config::{Config, GenerationConfig, NarrationConfig, PlacesConfig, ServerConfig};

/// Builder for constructing test configurations
///
/// Backends point at mock servers; timeouts and retry delays are kept
/// small so failure-path tests stay fast.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder with both backends pointed at the given mock URLs
    pub fn new(generation_url: &str, narration_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig::default(),
                generation: GenerationConfig {
                    api_key: SecretString::from("test-key"),
                    model: "gemini-2.5-flash".to_owned(),
                    base_url: Some(generation_url.parse().expect("valid URL")),
                    temperature: 0.7,
                    max_output_tokens: 1500,
                    timeout_secs: 5,
                    max_retries: 0,
                    retry_base_delay_ms: 10,
                },
                narration: NarrationConfig {
                    api_key: SecretString::from("test-key"),
                    voice: "alloy".to_owned(),
                    model: "eleven_multilingual_v2".to_owned(),
                    base_url: Some(narration_url.parse().expect("valid URL")),
                    timeout_secs: 5,
                },
                places: None,
            },
        }
    }

    /// Allow `retries` extra generation attempts after a transient failure
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.config.generation.max_retries = retries;
        self
    }

    /// Point place enrichment at a mock lookup backend
    pub fn with_places_backend(mut self, base_url: &str) -> Self {
        self.config.places = Some(PlacesConfig {
            base_url: base_url.parse().expect("valid URL"),
            timeout_secs: 5,
        });
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        let config = self.config;
        config.validate().expect("test config must validate");
        config
    }
}
