#![allow(clippy::must_use_candidate)]

mod env;
pub mod generation;
pub mod health;
mod loader;
pub mod narration;
pub mod places;
pub mod server;

use serde::Deserialize;

pub use generation::GenerationConfig;
pub use health::HealthConfig;
pub use narration::NarrationConfig;
pub use places::PlacesConfig;
pub use server::ServerConfig;

/// Top-level Wayfarer configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Itinerary generation backend configuration
    pub generation: GenerationConfig,
    /// Speech synthesis backend configuration
    pub narration: NarrationConfig,
    /// Place lookup configuration; enrichment is skipped when absent
    #[serde(default)]
    pub places: Option<PlacesConfig>,
}
