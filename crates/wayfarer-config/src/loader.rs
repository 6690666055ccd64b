use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Credentials are required at startup: a missing or empty API key is a
    /// load failure, not a per-request error.
    ///
    /// # Errors
    ///
    /// Returns an error if a required credential is empty or a timeout or
    /// retry setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.generation.api_key.expose_secret().is_empty() {
            anyhow::bail!("generation.api_key must not be empty");
        }
        if self.generation.model.is_empty() {
            anyhow::bail!("generation.model must not be empty");
        }
        if self.generation.timeout_secs == 0 {
            anyhow::bail!("generation.timeout_secs must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            anyhow::bail!("generation.temperature must be within 0.0..=2.0");
        }

        if self.narration.api_key.expose_secret().is_empty() {
            anyhow::bail!("narration.api_key must not be empty");
        }
        if self.narration.voice.is_empty() {
            anyhow::bail!("narration.voice must not be empty");
        }
        if self.narration.timeout_secs == 0 {
            anyhow::bail!("narration.timeout_secs must be greater than 0");
        }

        if let Some(ref places) = self.places
            && places.timeout_secs == 0
        {
            anyhow::bail!("places.timeout_secs must be greater than 0");
        }

        Ok(())
    }
}
