//! Adapters Layer - External System Implementations
//!
//! Implementations of the port traits:
//! - Solana: JSON-RPC mint metadata client
//! - GeckoTerminal: market data and OHLCV history client
//! - Logo: HEAD-request reachability probe
//! - CLI: command-line interface definitions

pub mod solana;
pub mod geckoterminal;
pub mod logo;
pub mod cli;

pub use solana::{SolanaRpcClient, SolanaRpcConfig};
pub use geckoterminal::{GeckoTerminalClient, GeckoTerminalConfig};
pub use logo::HeadLogoProbe;
pub use cli::CliApp;
