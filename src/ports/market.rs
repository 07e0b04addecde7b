//! Market Data Port
//!
//! Abstraction over the market-data provider: token attributes plus top-pool
//! figures, and best-effort daily OHLCV history.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Candle;

/// Market-side view of a token after pool-figure merging.
///
/// Numeric fields are already coerced: the provider's string numbers become
/// f64 and absent values become 0, never null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    pub name: String,
    pub symbol: String,
    /// Unvalidated logo URL as reported by the provider
    pub logo_url: Option<String>,
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub liquidity: f64,
}

/// Errors from the market-data source.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The primary token-info endpoint returned a non-success status.
    /// Carries the upstream HTTP status for caller-side mapping.
    #[error("market data provider returned HTTP {status}")]
    Provider { status: u16 },

    #[error("market data transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(String),
}

/// Source of market data for a token.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch token attributes and top-pool figures.
    ///
    /// An empty pool list is a partial success (zeroed volume, price change
    /// and liquidity), not an error.
    async fn fetch_market(&self, address: &str) -> Result<MarketSnapshot, MarketError>;

    /// Fetch daily OHLCV candles for the token's most liquid pool.
    ///
    /// `Ok(None)` means the provider has no data for this token (404 or no
    /// pool) - absence is data, not failure.
    async fn fetch_history(&self, address: &str) -> Result<Option<Vec<Candle>>, MarketError>;
}
