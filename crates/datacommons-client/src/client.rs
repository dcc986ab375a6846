//! Connection management and the shared POST helper.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use datacommons_core::{ClientConfig, DcError};

/// Errors from API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] DcError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Thread-safe Data Commons API client.
///
/// Holds the API key and base URL for the lifetime of the client; every call
/// is an independent request. Clone is cheap (reqwest pools internally).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Build a client from an explicit configuration.
    ///
    /// Fails immediately if the configuration cannot authenticate; a client
    /// is never constructed with an empty key.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(base_url = %config.base_url, "Created Data Commons client");
        Ok(Self { http, config })
    }

    /// Build a client with an explicit API key and the default endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Build a client from `DC_*` environment variables (`DC_API_KEY`,
    /// `DC_BASE_URL`, `DC_TIMEOUT_SECS`).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a JSON body to `base_url + path` and deserialize the response.
    ///
    /// A non-2xx status is returned as [`ApiError::Status`] with the response
    /// body attached; it is never coerced into an empty result.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%url, "Sending API request");

        let response = self
            .http
            .post(&url)
            .header("X-API-Key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %url, "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
