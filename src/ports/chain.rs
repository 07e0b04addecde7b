//! Chain Metadata Port
//!
//! Abstraction over reading SPL mint account state for a token address.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::OnChainData;

/// Errors from the on-chain metadata source.
///
/// These are authoritative-record failures: the aggregator surfaces them
/// immediately and never retries them.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("no account found at {0}")]
    NotFound(String),

    #[error("account at {0} is not an initialized mint")]
    NotMint(String),

    #[error("RPC transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("failed to parse RPC response: {0}")]
    Parse(String),
}

/// Source of on-chain mint metadata.
#[async_trait]
pub trait ChainMetadataSource: Send + Sync {
    /// Resolve the mint account at `address` and return its parsed state.
    ///
    /// Fails fast with [`ChainError::NotFound`] when no account exists, and
    /// with [`ChainError::NotMint`] when the account is not an initialized
    /// SPL mint.
    async fn fetch_mint(&self, address: &str) -> Result<OnChainData, ChainError>;
}
