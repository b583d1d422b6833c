//! On-chain pool lookups — GeckoTerminal endpoints.
//!
//! [`PoolService::get_pool`] is the production surface: callers never need
//! an error branch, because "no match" and "lookup failed" both collapse
//! into [`PoolData::fallback`]. The typed operations underneath propagate
//! errors normally for callers that want diagnostics.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::{CoinGeckoClient, QueryParams};
use crate::error::Result;

/// A liquidity pool record on a blockchain network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolData {
    pub id: String,
    pub address: String,
    pub name: String,
    pub network: String,
}

impl PoolData {
    /// The all-empty sentinel returned when nothing is found or a lookup
    /// fails.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// True for the all-empty sentinel.
    pub fn is_fallback(&self) -> bool {
        self.id.is_empty()
            && self.address.is_empty()
            && self.name.is_empty()
            && self.network.is_empty()
    }
}

/// Success envelope for pool endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolsResponse {
    pub data: Vec<PoolData>,
}

/// Pool lookup operations.
pub struct PoolService;

impl PoolService {
    /// Top pools for a token, scoped to a network and contract address.
    pub async fn token_pools(
        client: &CoinGeckoClient,
        network: &str,
        contract_address: &str,
    ) -> Result<Vec<PoolData>> {
        let endpoint = format!("onchain/networks/{network}/tokens/{contract_address}/pools");
        let resp: PoolsResponse = client.fetch_json(&endpoint, None, None).await?;
        Ok(resp.data)
    }

    /// Free-text pool search.
    pub async fn search_pools(client: &CoinGeckoClient, query: &str) -> Result<Vec<PoolData>> {
        let params = QueryParams::new().with("query", query);
        let resp: PoolsResponse = client
            .fetch_json("onchain/search/pools", Some(&params), None)
            .await?;
        Ok(resp.data)
    }

    /// First matching pool, or `None` when the result list is empty.
    ///
    /// Direct network + contract-address lookup when both are given
    /// (empty strings count as missing), free-text search by `id`
    /// otherwise. Errors propagate — use [`Self::get_pool`] for the
    /// swallowing variant.
    pub async fn lookup_pool(
        client: &CoinGeckoClient,
        id: &str,
        network: Option<&str>,
        contract_address: Option<&str>,
    ) -> Result<Option<PoolData>> {
        let pools = match direct_target(network, contract_address) {
            Some((network, address)) => Self::token_pools(client, network, address).await?,
            None => Self::search_pools(client, id).await?,
        };
        Ok(pools.into_iter().next())
    }

    /// Pool metadata for a token. Never fails: empty results and lookup
    /// errors both return [`PoolData::fallback`].
    pub async fn get_pool(
        client: &CoinGeckoClient,
        id: &str,
        network: Option<&str>,
        contract_address: Option<&str>,
    ) -> PoolData {
        let direct = direct_target(network, contract_address).is_some();

        match Self::lookup_pool(client, id, network, contract_address).await {
            Ok(Some(pool)) => pool,
            Ok(None) => PoolData::fallback(),
            Err(err) => {
                // Only the direct branch reports failures; the search
                // branch stays silent.
                if direct {
                    warn!("pool lookup failed: {err}");
                }
                PoolData::fallback()
            }
        }
    }
}

/// Both parts of a direct lookup, when present and non-empty.
fn direct_target<'a>(
    network: Option<&'a str>,
    contract_address: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    match (network, contract_address) {
        (Some(n), Some(a)) if !n.is_empty() && !a.is_empty() => Some((n, a)),
        _ => None,
    }
}
