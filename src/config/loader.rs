//! Configuration Loader
//!
//! Loads and validates configuration from TOML files. Every section has
//! defaults, so a partial file (or no file at all) still yields a working
//! configuration; secrets come from the environment, not the file.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub solana: SolanaSection,
    #[serde(default)]
    pub market_data: MarketDataSection,
    #[serde(default)]
    pub logo: LogoSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Solana RPC configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolanaSection {
    /// RPC endpoint (use a private RPC for production)
    pub rpc_url: String,
    /// Commitment level: "processed", "confirmed", "finalized"
    pub commitment: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SolanaSection {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            timeout_secs: 30,
        }
    }
}

impl SolanaSection {
    /// RPC URL with environment variable override.
    /// Checks SOLANA_RPC_URL first, falls back to the config value.
    pub fn get_rpc_url(&self) -> String {
        std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| self.rpc_url.clone())
    }
}

/// Market data provider configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketDataSection {
    /// Provider base URL
    pub base_url: String,
    /// Network path segment
    pub network: String,
    /// Optional API key (prefer the GECKOTERMINAL_API_KEY env var)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MarketDataSection {
    fn default() -> Self {
        Self {
            base_url: "https://api.geckoterminal.com/api/v2".to_string(),
            network: "solana".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl MarketDataSection {
    /// API key with environment variable override.
    /// Checks GECKOTERMINAL_API_KEY first, falls back to the config value.
    pub fn get_api_key(&self) -> Option<String> {
        std::env::var("GECKOTERMINAL_API_KEY")
            .ok()
            .or_else(|| self.api_key.clone())
    }
}

/// Logo validation configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogoSection {
    /// Per-attempt HEAD request timeout in seconds
    pub timeout_secs: u64,
    /// Total probe attempts
    pub max_attempts: u32,
    /// Pause between attempts in milliseconds
    pub backoff_ms: u64,
    /// Path substituted when the logo is missing or unreachable
    pub placeholder: String,
}

impl Default for LogoSection {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            max_attempts: 3,
            backoff_ms: 1000,
            placeholder: crate::domain::PLACEHOLDER_LOGO.to_string(),
        }
    }
}

impl LogoSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file if it exists, defaults otherwise.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "solana.rpc_url must not be empty".to_string(),
            ));
        }

        const COMMITMENTS: [&str; 3] = ["processed", "confirmed", "finalized"];
        if !COMMITMENTS.contains(&self.solana.commitment.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "solana.commitment must be one of {:?}, got '{}'",
                COMMITMENTS, self.solana.commitment
            )));
        }

        if self.solana.timeout_secs == 0 || self.market_data.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be > 0".to_string(),
            ));
        }

        if self.market_data.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "market_data.base_url must not be empty".to_string(),
            ));
        }

        if self.logo.max_attempts == 0 {
            return Err(ConfigError::ValidationError(format!(
                "logo.max_attempts must be > 0, got {}",
                self.logo.max_attempts
            )));
        }

        if self.logo.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "logo.timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
