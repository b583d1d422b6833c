//! CoinGecko on-chain pool lookups.
//!
//! Thin server-side wrapper around the CoinGecko market-data API:
//! - [`CoinGeckoClient`] — builds URLs from the configured base, serializes
//!   query parameters, validates response status, and normalizes errors.
//! - [`PoolService`] — pool metadata lookup for a token, by network +
//!   contract address or by free-text search. Its [`PoolService::get_pool`]
//!   surface never fails: every error collapses into the all-empty
//!   [`PoolData`] sentinel.
//!
//! Configuration (base URL + API key) is resolved once at process start via
//! [`Config::from_env`] and is fatal there if missing — never per call.

pub mod client;
pub mod config;
pub mod error;
pub mod pools;

pub use client::{CoinGeckoClient, QueryParams, QueryValue, DEFAULT_REVALIDATE};
pub use config::Config;
pub use error::{Error, Result};
pub use pools::{PoolData, PoolService, PoolsResponse};
