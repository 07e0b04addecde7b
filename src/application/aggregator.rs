//! Token Aggregator
//!
//! Orchestrates one aggregation run: validate the address, fetch on-chain
//! and market data concurrently, validate or replace the logo, fetch history
//! best-effort, derive links, and stamp the result.
//!
//! Failure policy: the call fails if either primary fetch (chain or market)
//! fails - both records are authoritative. Logo and history failures are
//! absorbed and never bubble up.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::domain::{is_valid_token_address, TokenRecord, TokenUrls};
use crate::ports::chain::{ChainError, ChainMetadataSource};
use crate::ports::market::{MarketDataSource, MarketError};

use super::logo::LogoValidator;

/// Error surface exposed to callers. A small closed set the caller maps to
/// transport-level responses (400 invalid address, 404 not found, 502/504
/// upstream failures).
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Input failed shape validation; no network I/O was attempted.
    #[error("invalid token address: {0}")]
    InvalidAddress(String),

    /// Well-formed address with no initialized mint account behind it.
    #[error("no mint found for address {0}")]
    ChainNotFound(String),

    /// RPC call failed reading mint data for a validly-formed address.
    #[error("on-chain metadata fetch failed")]
    ChainFetch(#[source] ChainError),

    /// Market provider returned a non-success status for the primary lookup.
    #[error("market data provider returned HTTP {status}")]
    MarketProvider { status: u16 },

    /// Market data fetch failed below the HTTP layer.
    #[error("market data fetch failed")]
    MarketFetch(#[source] MarketError),
}

impl From<ChainError> for AggregateError {
    fn from(e: ChainError) -> Self {
        match e {
            ChainError::NotFound(addr) | ChainError::NotMint(addr) => {
                AggregateError::ChainNotFound(addr)
            }
            other => AggregateError::ChainFetch(other),
        }
    }
}

impl From<MarketError> for AggregateError {
    fn from(e: MarketError) -> Self {
        match e {
            MarketError::Provider { status } => AggregateError::MarketProvider { status },
            other => AggregateError::MarketFetch(other),
        }
    }
}

/// Aggregates one token record per call from injected collaborators.
///
/// Stateless across calls: every aggregation re-fetches from scratch, and
/// the caller owns client lifecycles.
pub struct TokenAggregator {
    chain: Arc<dyn ChainMetadataSource>,
    market: Arc<dyn MarketDataSource>,
    logo: LogoValidator,
    include_history: bool,
}

impl TokenAggregator {
    pub fn new(
        chain: Arc<dyn ChainMetadataSource>,
        market: Arc<dyn MarketDataSource>,
        logo: LogoValidator,
    ) -> Self {
        Self {
            chain,
            market,
            logo,
            include_history: true,
        }
    }

    /// Skip the best-effort history fetch entirely.
    pub fn without_history(mut self) -> Self {
        self.include_history = false;
        self
    }

    /// Produce a normalized [`TokenRecord`] for `address`.
    pub async fn aggregate(&self, address: &str) -> Result<TokenRecord, AggregateError> {
        // Validated before any network call is issued
        if !is_valid_token_address(address) {
            return Err(AggregateError::InvalidAddress(address.to_string()));
        }

        tracing::info!(address, "aggregating token record");

        // The two authoritative fetches are independent: fan out, fail on
        // whichever errors first.
        let (on_chain_data, snapshot) = tokio::try_join!(
            async { self.chain.fetch_mint(address).await.map_err(AggregateError::from) },
            async { self.market.fetch_market(address).await.map_err(AggregateError::from) },
        )?;

        let logo = self.logo.resolve(snapshot.logo_url.as_deref()).await;

        // Best-effort: any history failure degrades to absent
        let historical_data = if self.include_history {
            match self.market.fetch_history(address).await {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!(address, error = %e, "history fetch failed, omitting candles");
                    None
                }
            }
        } else {
            None
        };

        Ok(TokenRecord {
            contract_address: address.to_string(),
            name: snapshot.name,
            symbol: snapshot.symbol,
            logo,
            price: snapshot.price,
            metadata: crate::domain::MarketMetadata {
                market_cap: snapshot.market_cap,
                volume_24h: snapshot.volume_24h,
                price_change_24h: snapshot.price_change_24h,
                liquidity: snapshot.liquidity,
            },
            on_chain_data,
            historical_data,
            urls: TokenUrls::for_address(address),
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OnChainData;
    use crate::ports::mocks::{MockChainSource, MockLogoProbe, MockMarketSource};
    use crate::ports::market::MarketSnapshot;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn usdc_on_chain() -> OnChainData {
        OnChainData {
            supply: "45000000000000000".to_string(),
            decimals: 6,
            mint_authority: None,
            freeze_authority: None,
            is_initialized: true,
        }
    }

    fn usdc_snapshot() -> MarketSnapshot {
        MarketSnapshot {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            logo_url: Some("https://assets.example.com/usdc.png".to_string()),
            price: 1.0,
            market_cap: 45_000_000_000.0,
            volume_24h: 1_000_000.0,
            price_change_24h: 0.01,
            liquidity: 500_000.0,
        }
    }

    fn aggregator(
        chain: MockChainSource,
        market: MockMarketSource,
        probe: MockLogoProbe,
    ) -> TokenAggregator {
        TokenAggregator::new(
            Arc::new(chain),
            Arc::new(market),
            LogoValidator::new(Arc::new(probe)),
        )
    }

    #[tokio::test]
    async fn test_invalid_address_issues_zero_network_calls() {
        let chain = MockChainSource::with_mint(usdc_on_chain());
        let market = MockMarketSource::with_snapshot(usdc_snapshot());
        let probe = MockLogoProbe::new();
        let (chain_calls, market_calls, probe_calls) =
            (chain.clone(), market.clone(), probe.clone());

        let result = aggregator(chain, market, probe).aggregate("0xdeadbeef").await;

        assert!(matches!(result, Err(AggregateError::InvalidAddress(_))));
        assert_eq!(chain_calls.call_count(), 0);
        assert_eq!(market_calls.call_count(), 0);
        assert_eq!(probe_calls.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chain_not_found_fails_aggregation() {
        let chain = MockChainSource::not_found();
        let market = MockMarketSource::with_snapshot(usdc_snapshot());

        let result = aggregator(chain, market, MockLogoProbe::new())
            .aggregate(USDC_MINT)
            .await;

        assert!(matches!(result, Err(AggregateError::ChainNotFound(_))));
    }

    #[tokio::test]
    async fn test_non_mint_account_maps_to_not_found() {
        let chain = MockChainSource::not_mint();
        let market = MockMarketSource::with_snapshot(usdc_snapshot());

        let result = aggregator(chain, market, MockLogoProbe::new())
            .aggregate(USDC_MINT)
            .await;

        assert!(matches!(result, Err(AggregateError::ChainNotFound(_))));
    }

    #[tokio::test]
    async fn test_market_provider_failure_is_fatal() {
        let chain = MockChainSource::with_mint(usdc_on_chain());
        let market = MockMarketSource::with_provider_status(503);

        let result = aggregator(chain, market, MockLogoProbe::new())
            .aggregate(USDC_MINT)
            .await;

        match result {
            Err(AggregateError::MarketProvider { status }) => assert_eq!(status, 503),
            other => panic!("expected MarketProvider error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_chain_rpc_failure_is_fatal() {
        let chain = MockChainSource::failing("connection refused");
        let market = MockMarketSource::with_snapshot(usdc_snapshot());

        let result = aggregator(chain, market, MockLogoProbe::new())
            .aggregate(USDC_MINT)
            .await;

        assert!(matches!(result, Err(AggregateError::ChainFetch(_))));
    }

    #[tokio::test]
    async fn test_without_history_skips_the_fetch() {
        let chain = MockChainSource::with_mint(usdc_on_chain());
        let market = MockMarketSource::with_snapshot(usdc_snapshot());
        let history_calls = market.clone();
        let probe = MockLogoProbe::new().with_response(200, Some("image/png"));

        let record = aggregator(chain, market, probe)
            .without_history()
            .aggregate(USDC_MINT)
            .await
            .unwrap();

        assert!(record.historical_data.is_none());
        assert!(history_calls.history_calls().is_empty());
    }

    #[tokio::test]
    async fn test_history_failure_is_absorbed() {
        let chain = MockChainSource::with_mint(usdc_on_chain());
        let market =
            MockMarketSource::with_snapshot(usdc_snapshot()).with_failing_history("provider down");
        let probe = MockLogoProbe::new().with_response(200, Some("image/png"));

        let record = aggregator(chain, market, probe)
            .aggregate(USDC_MINT)
            .await
            .unwrap();

        assert!(record.historical_data.is_none());
        assert_eq!(record.price, 1.0);
    }
}
