//! Application Layer - Aggregation use cases
//!
//! Wires the port implementations into the one operation this crate exists
//! for: producing a normalized token record from a contract address.

pub mod aggregator;
pub mod logo;

pub use aggregator::{AggregateError, TokenAggregator};
pub use logo::LogoValidator;
