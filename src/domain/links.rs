//! Derived Token Links
//!
//! Explorer and trading URLs computed deterministically from the contract
//! address using fixed templates. No network calls, no validation - the
//! address is assumed to have passed shape validation already.

use serde::{Deserialize, Serialize};

/// Block explorer links for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerLinks {
    pub solscan: String,
    #[serde(rename = "solanaExplorer")]
    pub solana_explorer: String,
    #[serde(rename = "solanaFm")]
    pub solana_fm: String,
}

/// Swap/trading links for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingLinks {
    pub raydium: String,
    pub jupiter: String,
    pub dexscreener: String,
}

/// All derived links for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUrls {
    pub explorers: ExplorerLinks,
    pub trading: TradingLinks,
}

impl TokenUrls {
    /// Build the full link set for a contract address.
    pub fn for_address(address: &str) -> Self {
        Self {
            explorers: ExplorerLinks {
                solscan: format!("https://solscan.io/token/{}", address),
                solana_explorer: format!("https://explorer.solana.com/address/{}", address),
                solana_fm: format!("https://solana.fm/address/{}", address),
            },
            trading: TradingLinks {
                raydium: format!(
                    "https://raydium.io/swap/?inputCurrency=sol&outputCurrency={}",
                    address
                ),
                jupiter: format!("https://jup.ag/swap/SOL-{}", address),
                dexscreener: format!("https://dexscreener.com/solana/{}", address),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_explorer_links() {
        let urls = TokenUrls::for_address(USDC_MINT);
        assert_eq!(
            urls.explorers.solscan,
            "https://solscan.io/token/EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
        );
        assert!(urls.explorers.solana_explorer.ends_with(USDC_MINT));
        assert!(urls.explorers.solana_fm.ends_with(USDC_MINT));
    }

    #[test]
    fn test_trading_links() {
        let urls = TokenUrls::for_address(USDC_MINT);
        assert!(urls.trading.raydium.contains("outputCurrency="));
        assert!(urls.trading.jupiter.ends_with(&format!("SOL-{}", USDC_MINT)));
        assert!(urls.trading.dexscreener.ends_with(USDC_MINT));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            TokenUrls::for_address(USDC_MINT),
            TokenUrls::for_address(USDC_MINT)
        );
    }

    #[test]
    fn test_serialized_names() {
        let urls = TokenUrls::for_address(USDC_MINT);
        let json = serde_json::to_value(&urls).unwrap();
        assert!(json["explorers"]["solanaExplorer"].is_string());
        assert!(json["explorers"]["solanaFm"].is_string());
        assert!(json["trading"]["dexscreener"].is_string());
    }
}
