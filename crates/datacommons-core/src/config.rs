//! Configuration for the Data Commons API client.
//!
//! Configuration is either constructed explicitly with an API key, or loaded
//! from `DC_`-prefixed environment variables (`DC_API_KEY`, `DC_BASE_URL`,
//! `DC_TIMEOUT_SECS`). The client itself never reads ambient state; it only
//! receives a [`ClientConfig`] value.

use serde::Deserialize;

use crate::error::{DcError, Result};

/// Settings for connecting to the Data Commons API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API key sent as the `X-API-Key` header.
    pub api_key: String,

    /// Base URL of the API host (default: the public instance).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Build a configuration with an explicit API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load configuration from `DC_*` environment variables.
    ///
    /// Fails with [`DcError::Config`] if `DC_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("DC"))
            .build()
            .map_err(|e| DcError::Config(e.to_string()))?;

        let cfg: ClientConfig = settings
            .try_deserialize()
            .map_err(|e| DcError::Config(format!("DC_API_KEY is not set ({e})")))?;
        cfg.validate()?;

        tracing::debug!(base_url = %cfg.base_url, "Loaded client configuration from environment");
        Ok(cfg)
    }

    /// Reject configurations that cannot possibly authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(DcError::Config("API key is empty".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(DcError::Config("base URL is empty".to_string()));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.datacommons.org".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_gets_defaults() {
        let cfg = ClientConfig::new("test-key");
        assert_eq!(cfg.api_key, "test-key");
        assert_eq!(cfg.base_url, "https://api.datacommons.org");
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let cfg = ClientConfig::new("");
        assert!(matches!(cfg.validate(), Err(DcError::Config(_))));
    }
}
