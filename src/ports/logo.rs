//! Logo Probe Port
//!
//! Abstraction over the HEAD-request probe used to check that a logo URL
//! references a reachable image resource.

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a single HEAD probe that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub content_type: Option<String>,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level probe failures. These are the retryable cases; an
/// unsuccessful HTTP status is reported through [`ProbeResponse`] instead.
#[derive(Debug, Clone, Error)]
pub enum LogoProbeError {
    #[error("probe timed out")]
    Timeout,

    #[error("probe transport error: {0}")]
    Transport(String),
}

/// Issues a single bounded HEAD request against a URL.
#[async_trait]
pub trait LogoProbe: Send + Sync {
    async fn head(&self, url: &str) -> Result<ProbeResponse, LogoProbeError>;
}
