//! Process-wide configuration — resolved once at startup.
//!
//! Both values are required. Construction fails immediately on a missing or
//! empty value: a bad environment is a startup failure, never a per-call
//! error.

use url::Url;

use crate::error::{Error, Result};

/// Environment variable naming the API base URL.
pub const ENV_BASE_URL: &str = "COINGECKO_BASE_URL";
/// Environment variable naming the demo API key.
pub const ENV_API_KEY: &str = "COINGECKO_API_KEY";

/// CoinGecko connection settings.
///
/// Read-only after construction; share it by cloning into
/// [`crate::CoinGeckoClient`].
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, e.g. `https://api.coingecko.com/api/v3`. Stored
    /// without a trailing slash.
    pub base_url: String,
    /// Demo API key, sent as the `x-cg-demo-api-key` header.
    pub api_key: String,
}

impl Config {
    /// Validate and build a config from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.is_empty() {
            return Err(Error::Config("Could not get base url".into()));
        }
        if api_key.is_empty() {
            return Err(Error::Config("Could not get api key".into()));
        }
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid base url '{base_url}': {e}")))?;

        // A trailing slash would double up when endpoints are appended.
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { base_url, api_key })
    }

    /// Build from `COINGECKO_BASE_URL` / `COINGECKO_API_KEY`, honoring a
    /// local `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| Error::Config(format!("{ENV_BASE_URL} is not set")))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_API_KEY} is not set")))?;

        Self::new(base_url, api_key)
    }
}
