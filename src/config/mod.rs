//! Configuration Module
//!
//! TOML configuration with per-section defaults, validation, and
//! environment-variable overrides for endpoint and secret values.

mod loader;

pub use loader::{
    load_config, load_or_default, Config, ConfigError, LoggingSection, LogoSection,
    MarketDataSection, SolanaSection,
};
