//! GeckoTerminal API Types
//!
//! Wire shapes for the token-info, pools, and OHLCV endpoints. The provider
//! reports numbers as strings; [`parse_f64`] coerces them with a 0 default so
//! downstream arithmetic is always well-defined.

use serde::Deserialize;

/// Coerce an optional provider string-number into an f64, defaulting to 0.
pub(crate) fn parse_f64(value: Option<&String>) -> f64 {
    value.and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0)
}

// ===== GET /networks/{network}/tokens/{address} =====

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoResponse {
    pub data: TokenInfoData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoData {
    pub attributes: TokenAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenAttributes {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub image_url: Option<String>,
    pub price_usd: Option<String>,
    pub market_cap_usd: Option<String>,
}

// ===== GET /networks/{network}/tokens/{address}/pools =====

#[derive(Debug, Clone, Deserialize)]
pub struct PoolsResponse {
    pub data: Vec<PoolData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolData {
    pub attributes: PoolAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolAttributes {
    pub address: String,
    pub volume_usd: Option<VolumeUsd>,
    pub price_change_percentage: Option<PriceChangePercentage>,
    pub reserve_in_usd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeUsd {
    pub h24: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceChangePercentage {
    pub h24: Option<String>,
}

// ===== GET /networks/{network}/pools/{pool}/ohlcv/day =====

#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvResponse {
    pub data: OhlcvData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvData {
    pub attributes: OhlcvAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvAttributes {
    /// Fixed-position rows: [timestamp, open, high, low, close, volume]
    pub ohlcv_list: Vec<[f64; 6]>,
}
