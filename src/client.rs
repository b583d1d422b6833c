//! CoinGecko HTTP fetch wrapper.
//!
//! Builds the request URL from the configured base and a relative endpoint,
//! serializes query parameters (empty and absent values are skipped), sends
//! one GET with the API-key and content-type headers, and normalizes
//! non-success responses into [`Error::Api`]. No retries, no timeout — the
//! transport's own defaults govern how long a call may stay pending.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// Default cache revalidation hint forwarded with every request.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

// ── Query Params ────────────────────────────────────────────────────

/// A single scalar query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Explicitly absent — the key is dropped during serialization.
    Absent,
}

impl QueryValue {
    /// Render the value, or `None` when the entry must be skipped
    /// (absent, or an empty string).
    fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) if s.is_empty() => None,
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::Float(f) => Some(f.to_string()),
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Absent => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(i64::from(v))
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Float(v)
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => QueryValue::Absent,
        }
    }
}

/// Ordered set of query parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Key/value pairs that survive serialization. Empty-string and absent
    /// values are dropped entirely — never rendered as `key=`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.render().map(|r| (k.clone(), r)))
            .collect()
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Error envelope the API attaches to non-success responses. Any other
/// body shape is tolerated as all-absent.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// CoinGecko HTTP client.
///
/// Cheap to clone — clones share the connection pool and the immutable
/// config, so concurrent calls need no coordination.
#[derive(Clone)]
pub struct CoinGeckoClient {
    http: Client,
    config: Config,
}

impl CoinGeckoClient {
    /// Create a new client from a validated [`Config`].
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Execute a GET against a relative endpoint and parse the JSON body
    /// as `T`.
    ///
    /// `endpoint` is appended to the configured base URL with a single
    /// separating slash. `revalidate` is a cache-freshness hint forwarded
    /// to the transport as a `Cache-Control: max-age` directive (default
    /// [`DEFAULT_REVALIDATE`]); it is a caching hint, not a deadline.
    ///
    /// Non-success statuses become [`Error::Api`] carrying the numeric
    /// status code and the upstream `error` text when the body has one.
    /// Transport failures pass through as [`Error::Http`].
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
        revalidate: Option<Duration>,
    ) -> Result<T> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let revalidate = revalidate.unwrap_or(DEFAULT_REVALIDATE);

        let mut req = self
            .http
            .get(&url)
            .header("x-cg-demo-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .header("Cache-Control", format!("max-age={}", revalidate.as_secs()));

        if let Some(params) = params {
            let pairs = params.to_pairs();
            if !pairs.is_empty() {
                req = req.query(&pairs);
            }
        }

        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let message = body.error.unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unknown").to_string()
            });
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}
