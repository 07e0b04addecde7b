//! Tokenlens - Solana token data aggregation CLI
//!
//! Thin binary over the library: builds the clients from configuration and
//! prints aggregation results as JSON.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tokenlens::adapters::cli::{CheckCmd, CliApp, Command, FetchCmd, HistoryCmd};
use tokenlens::adapters::{
    GeckoTerminalClient, GeckoTerminalConfig, HeadLogoProbe, SolanaRpcClient, SolanaRpcConfig,
};
use tokenlens::application::{LogoValidator, TokenAggregator};
use tokenlens::config::{load_or_default, Config};
use tokenlens::domain::{is_valid_token_address, RetryPolicy};
use tokenlens::ports::MarketDataSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets come from .env when present, never from config.toml
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    let config = match &app.command {
        Command::Fetch(cmd) => load_or_default(&cmd.config).context("Failed to load configuration")?,
        Command::History(cmd) => load_or_default(&cmd.config).context("Failed to load configuration")?,
        Command::Check(_) => Config::default(),
    };

    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Fetch(cmd) => fetch_command(cmd, &config).await,
        Command::Check(cmd) => check_command(cmd),
        Command::History(cmd) => history_command(cmd, &config).await,
    }
}

/// Initialize logging: CLI flags beat RUST_LOG, which beats the config level.
fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

/// Build the aggregator from configuration-backed clients.
fn build_aggregator(config: &Config) -> Result<TokenAggregator> {
    let chain = SolanaRpcClient::with_config(SolanaRpcConfig {
        rpc_url: config.solana.get_rpc_url(),
        commitment: config.solana.commitment.clone(),
        timeout: Duration::from_secs(config.solana.timeout_secs),
    })
    .context("Failed to create Solana RPC client")?;

    let market = build_market_client(config)?;

    let probe =
        HeadLogoProbe::new(config.logo.timeout()).context("Failed to create logo probe")?;
    let logo = LogoValidator::with_policy(
        Arc::new(probe),
        RetryPolicy::new(config.logo.max_attempts, config.logo.backoff()),
    )
    .with_placeholder(config.logo.placeholder.clone());

    Ok(TokenAggregator::new(Arc::new(chain), Arc::new(market), logo))
}

fn build_market_client(config: &Config) -> Result<GeckoTerminalClient> {
    GeckoTerminalClient::with_config(GeckoTerminalConfig {
        base_url: config.market_data.base_url.clone(),
        network: config.market_data.network.clone(),
        api_key: config.market_data.get_api_key(),
        timeout: Duration::from_secs(config.market_data.timeout_secs),
    })
    .context("Failed to create market data client")
}

/// Handle fetch command
async fn fetch_command(cmd: FetchCmd, config: &Config) -> Result<()> {
    let mut aggregator = build_aggregator(config)?;
    if cmd.no_history {
        aggregator = aggregator.without_history();
    }

    let record = aggregator
        .aggregate(&cmd.address)
        .await
        .with_context(|| format!("Aggregation failed for {}", cmd.address))?;

    let json = if cmd.compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{}", json);

    Ok(())
}

/// Handle check command (offline, exit code 1 on invalid input)
fn check_command(cmd: CheckCmd) -> Result<()> {
    if is_valid_token_address(&cmd.address) {
        println!("{} is a valid Solana token address", cmd.address);
        Ok(())
    } else {
        println!("{} is not a valid Solana token address", cmd.address);
        std::process::exit(1);
    }
}

/// Handle history command
async fn history_command(cmd: HistoryCmd, config: &Config) -> Result<()> {
    if !is_valid_token_address(&cmd.address) {
        anyhow::bail!("invalid token address: {}", cmd.address);
    }

    let market = build_market_client(config)?;
    let history = market
        .fetch_history(&cmd.address)
        .await
        .with_context(|| format!("History fetch failed for {}", cmd.address))?;

    match history {
        Some(candles) => println!("{}", serde_json::to_string_pretty(&candles)?),
        None => println!("No historical data available for {}", cmd.address),
    }

    Ok(())
}
