//! Ports Layer - Trait definitions for external dependencies
//!
//! Interfaces the adapters implement, following hexagonal architecture:
//! - On-chain mint metadata (Solana RPC)
//! - Market data and historical candles (market-data provider)
//! - Logo reachability probing (HEAD requests)
//!
//! `mocks` provides call-recording implementations for deterministic tests.

pub mod chain;
pub mod market;
pub mod logo;
pub mod mocks;

pub use chain::{ChainError, ChainMetadataSource};
pub use market::{MarketDataSource, MarketError, MarketSnapshot};
pub use logo::{LogoProbe, LogoProbeError, ProbeResponse};
