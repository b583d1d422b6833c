//! Error types for the CoinGecko wrapper.

use thiserror::Error;

/// Top-level error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success HTTP status from the API. `message` is the upstream
    /// `error` field when the body carries one, the status' canonical
    /// reason otherwise.
    #[error("CoinGecko API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure, passed through from the HTTP client.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_embeds_status() {
        let err = Error::Api {
            status: 429,
            message: "rate limited".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("429"));
        assert!(rendered.contains("rate limited"));
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("Could not get api key".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: Could not get api key"
        );
    }
}
