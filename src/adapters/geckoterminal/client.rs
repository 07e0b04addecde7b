//! GeckoTerminal Market Data Client
//!
//! Two-call market snapshot (token attributes + top pool) and best-effort
//! daily OHLCV history. Pool figures degrade to zeros when the token has no
//! pools; history degrades to absent on 404 or malformed payloads. Only the
//! primary token-info endpoint can fail the snapshot.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::StatusCode;

use crate::domain::Candle;
use crate::ports::market::{MarketDataSource, MarketError, MarketSnapshot};

use super::types::{parse_f64, OhlcvResponse, PoolAttributes, PoolsResponse, TokenInfoResponse};

/// Configuration for the GeckoTerminal client.
#[derive(Clone)]
pub struct GeckoTerminalConfig {
    pub base_url: String,
    /// Network path segment, e.g. "solana"
    pub network: String,
    /// Optional API key for higher rate limits
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for GeckoTerminalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.geckoterminal.com/api/v2".to_string(),
            network: "solana".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

// Manual impl: the API key must never appear in debug logs
impl fmt::Debug for GeckoTerminalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeckoTerminalConfig")
            .field("base_url", &self.base_url)
            .field("network", &self.network)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Market data client backed by the GeckoTerminal REST API.
#[derive(Debug, Clone)]
pub struct GeckoTerminalClient {
    config: GeckoTerminalConfig,
    http: reqwest::Client,
}

impl GeckoTerminalClient {
    pub fn new() -> Result<Self, MarketError> {
        Self::with_config(GeckoTerminalConfig::default())
    }

    pub fn with_config(config: GeckoTerminalConfig) -> Result<Self, MarketError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.get(url);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }
        request
    }

    async fn fetch_token_info(&self, address: &str) -> Result<TokenInfoResponse, MarketError> {
        let url = format!(
            "{}/networks/{}/tokens/{}",
            self.config.base_url, self.config.network, address
        );

        let response = self.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Provider {
                status: status.as_u16(),
            });
        }

        response
            .json::<TokenInfoResponse>()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))
    }

    /// Fetch the token's most liquid pool (page 1, first entry - the
    /// provider ranks pools for us). Pool figures are optional, so every
    /// failure here - transport, status, or parse - degrades to `None`.
    async fn fetch_top_pool(&self, address: &str) -> Option<PoolAttributes> {
        let url = format!(
            "{}/networks/{}/tokens/{}/pools?page=1",
            self.config.base_url, self.config.network, address
        );

        let response = match self.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(address, error = %e, "pool lookup failed, degrading to zeroed figures");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(address, %status, "pool lookup failed, degrading to zeroed figures");
            return None;
        }

        match response.json::<PoolsResponse>().await {
            Ok(pools) => pools.data.into_iter().next().map(|p| p.attributes),
            Err(e) => {
                tracing::warn!(address, error = %e, "malformed pools payload, degrading to zeroed figures");
                None
            }
        }
    }

    /// Merge token attributes and an optional top pool into a snapshot.
    fn build_snapshot(info: TokenInfoResponse, pool: Option<&PoolAttributes>) -> MarketSnapshot {
        let attrs = info.data.attributes;
        MarketSnapshot {
            name: attrs.name.unwrap_or_default(),
            symbol: attrs.symbol.unwrap_or_default(),
            logo_url: attrs.image_url,
            price: parse_f64(attrs.price_usd.as_ref()),
            market_cap: parse_f64(attrs.market_cap_usd.as_ref()),
            volume_24h: parse_f64(
                pool.and_then(|p| p.volume_usd.as_ref())
                    .and_then(|v| v.h24.as_ref()),
            ),
            price_change_24h: parse_f64(
                pool.and_then(|p| p.price_change_percentage.as_ref())
                    .and_then(|c| c.h24.as_ref()),
            ),
            liquidity: parse_f64(pool.and_then(|p| p.reserve_in_usd.as_ref())),
        }
    }

    /// Convert provider OHLCV rows into normalized candles, skipping rows
    /// whose timestamp cannot be represented.
    fn candles_from_rows(rows: Vec<[f64; 6]>) -> Vec<Candle> {
        rows.into_iter()
            .filter_map(|row| {
                let timestamp = DateTime::from_timestamp(row[0] as i64, 0)?;
                Some(Candle {
                    timestamp,
                    open: row[1],
                    high: row[2],
                    low: row[3],
                    close: row[4],
                    volume: row[5],
                })
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataSource for GeckoTerminalClient {
    async fn fetch_market(&self, address: &str) -> Result<MarketSnapshot, MarketError> {
        tracing::debug!(address, "fetching market data");
        let info = self.fetch_token_info(address).await?;
        let pool = self.fetch_top_pool(address).await;

        if pool.is_none() {
            tracing::debug!(address, "no pools listed, volume/liquidity default to 0");
        }

        Ok(Self::build_snapshot(info, pool.as_ref()))
    }

    async fn fetch_history(&self, address: &str) -> Result<Option<Vec<Candle>>, MarketError> {
        let Some(pool) = self.fetch_top_pool(address).await else {
            return Ok(None);
        };

        let url = format!(
            "{}/networks/{}/pools/{}/ohlcv/day",
            self.config.base_url, self.config.network, pool.address
        );

        let response = self.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(address, %status, "OHLCV lookup failed, treating history as absent");
            return Ok(None);
        }

        match response.json::<OhlcvResponse>().await {
            Ok(ohlcv) => Ok(Some(Self::candles_from_rows(
                ohlcv.data.attributes.ohlcv_list,
            ))),
            Err(e) => {
                tracing::warn!(address, error = %e, "malformed OHLCV payload, treating history as absent");
                Ok(None)
            }
        }
    }
}
