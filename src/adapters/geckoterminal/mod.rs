//! GeckoTerminal Adapter
//!
//! Implements [`crate::ports::MarketDataSource`] against the GeckoTerminal
//! REST API: token attributes, the token's top pool, and daily OHLCV candles.

mod client;
mod types;

pub use client::{GeckoTerminalClient, GeckoTerminalConfig};
