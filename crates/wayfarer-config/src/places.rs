use serde::Deserialize;
use url::Url;

/// Place lookup helper configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacesConfig {
    /// Lookup endpoint base URL
    pub base_url: Url,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    10
}
