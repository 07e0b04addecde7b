//! Token Record Types
//!
//! The normalized output of an aggregation run. Serialized field names match
//! the dashboard wire format consumed by callers, so several fields carry
//! explicit serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::links::TokenUrls;

/// Sentinel logo path substituted when a logo URL is missing or unreachable.
pub const PLACEHOLDER_LOGO: &str = "/placeholder-token.png";

/// Market figures for a token, sourced from the provider's top pool.
///
/// All fields default to 0 when the provider omits them so downstream
/// arithmetic is always well-defined. `price_change_24h` may be negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMetadata {
    pub market_cap: f64,
    pub volume_24h: f64,
    pub price_change_24h: f64,
    pub liquidity: f64,
}

/// On-chain mint account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainData {
    /// Total supply in base units, kept as a decimal string because token
    /// supplies can exceed the u64 range.
    pub supply: String,
    pub decimals: u8,
    /// None = authority permanently revoked
    #[serde(rename = "mintAuthority")]
    pub mint_authority: Option<String>,
    /// None = authority permanently revoked
    #[serde(rename = "freezeAuthority")]
    pub freeze_authority: Option<String>,
    #[serde(rename = "isInitialized")]
    pub is_initialized: bool,
}

impl OnChainData {
    /// True when both authorities are revoked and supply is fixed.
    pub fn authorities_revoked(&self) -> bool {
        self.mint_authority.is_none() && self.freeze_authority.is_none()
    }
}

/// One OHLCV bucket of historical price data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Normalized token record produced by one aggregation run.
///
/// Constructed fresh on every request; the caller decides whether and how to
/// persist or diff it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    /// May be empty when the market source omits it
    pub name: String,
    /// May be empty when the market source omits it
    pub symbol: String,
    /// Either confirmed reachable and image-typed, or [`PLACEHOLDER_LOGO`]
    pub logo: String,
    /// Current price in USD, non-negative
    pub price: f64,
    pub metadata: MarketMetadata,
    #[serde(rename = "onChainData")]
    pub on_chain_data: OnChainData,
    /// Absent when the provider has no historical data for the token
    #[serde(rename = "historicalData", skip_serializing_if = "Option::is_none")]
    pub historical_data: Option<Vec<Candle>>,
    pub urls: TokenUrls,
    pub updated_at: DateTime<Utc>,
}
