//! Tokenlens - Solana Token Data Aggregation Library
//!
//! Merges on-chain mint metadata and market data into one normalized
//! token record per contract address.
//!
//! # Modules
//!
//! - `domain`: Pure logic (address validation, TokenRecord, link templates, retry policy)
//! - `ports`: Trait abstractions (ChainMetadataSource, MarketDataSource, LogoProbe)
//! - `adapters`: External implementations (Solana RPC, GeckoTerminal, logo probe, CLI)
//! - `application`: TokenAggregator orchestrator and logo validation
//! - `config`: Configuration loading and validation

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod application;
pub mod config;
