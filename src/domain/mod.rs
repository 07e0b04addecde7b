//! Domain Layer - Pure token aggregation logic
//!
//! No I/O in this module. Everything here is deterministic and unit-testable:
//! - `address`: Solana address shape validation
//! - `token_record`: the normalized output record and its parts
//! - `links`: derived explorer/trading URLs
//! - `retry`: bounded-retry policy used by the logo validator

pub mod address;
pub mod token_record;
pub mod links;
pub mod retry;

pub use address::is_valid_token_address;
pub use token_record::{Candle, MarketMetadata, OnChainData, TokenRecord, PLACEHOLDER_LOGO};
pub use links::{ExplorerLinks, TokenUrls, TradingLinks};
pub use retry::RetryPolicy;
