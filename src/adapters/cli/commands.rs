//! CLI Command Definitions
//!
//! Argument structures for the tokenlens command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tokenlens - Solana token data aggregator
#[derive(Parser, Debug)]
#[command(
    name = "tokenlens",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solana token data aggregator",
    long_about = "Tokenlens merges on-chain mint metadata with market data from \
                  GeckoTerminal into one normalized token record per contract address."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate a full token record for a contract address
    Fetch(FetchCmd),

    /// Validate a contract address offline (no network calls)
    Check(CheckCmd),

    /// Fetch daily OHLCV history only
    History(HistoryCmd),
}

/// Aggregate a token record
#[derive(Parser, Debug)]
pub struct FetchCmd {
    /// Token contract address (base58 mint)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Skip the historical candle fetch
    #[arg(long)]
    pub no_history: bool,

    /// Compact JSON output (default is pretty-printed)
    #[arg(long)]
    pub compact: bool,
}

/// Offline address validation
#[derive(Parser, Debug)]
pub struct CheckCmd {
    /// Token contract address to validate
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

/// Fetch historical candles
#[derive(Parser, Debug)]
pub struct HistoryCmd {
    /// Token contract address (base58 mint)
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_parse_fetch() {
        let args = vec!["tokenlens", "fetch", USDC_MINT];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Fetch(cmd) => {
                assert_eq!(cmd.address, USDC_MINT);
                assert_eq!(cmd.config, PathBuf::from("config.toml"));
                assert!(!cmd.no_history);
                assert!(!cmd.compact);
            }
            _ => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_parse_fetch_with_flags() {
        let args = vec![
            "tokenlens",
            "fetch",
            USDC_MINT,
            "--no-history",
            "--compact",
            "--config",
            "custom.toml",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Fetch(cmd) => {
                assert!(cmd.no_history);
                assert!(cmd.compact);
                assert_eq!(cmd.config, PathBuf::from("custom.toml"));
            }
            _ => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_parse_check() {
        let args = vec!["tokenlens", "check", "0xdeadbeef"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Check(cmd) => assert_eq!(cmd.address, "0xdeadbeef"),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_parse_history() {
        let args = vec!["tokenlens", "history", USDC_MINT];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::History(cmd) => {
                assert_eq!(cmd.address, USDC_MINT);
                assert_eq!(cmd.config, PathBuf::from("config.toml"));
            }
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = vec!["tokenlens", "-v", "--debug", "check", USDC_MINT];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
    }

    #[test]
    fn test_missing_address_rejected() {
        let args = vec!["tokenlens", "fetch"];
        assert!(CliApp::try_parse_from(args).is_err());
    }
}
