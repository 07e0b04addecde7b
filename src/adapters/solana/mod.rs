//! Solana RPC Adapter
//!
//! Implements [`crate::ports::ChainMetadataSource`] over plain JSON-RPC:
//! `getAccountInfo` with `jsonParsed` encoding at confirmed commitment.
//! Supply is kept as a decimal string to avoid precision loss.

mod client;
mod types;

pub use client::{SolanaRpcClient, SolanaRpcConfig};
