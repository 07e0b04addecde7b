//! HEAD-request logo probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::ports::logo::{LogoProbe, LogoProbeError, ProbeResponse};

/// Probe that issues a bounded HEAD request per call.
#[derive(Debug, Clone)]
pub struct HeadLogoProbe {
    http: reqwest::Client,
}

impl HeadLogoProbe {
    /// Build a probe with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> Result<Self, LogoProbeError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LogoProbeError::Transport(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl LogoProbe for HeadLogoProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, LogoProbeError> {
        let response = self.http.head(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LogoProbeError::Timeout
            } else {
                LogoProbeError::Transport(e.to_string())
            }
        })?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(ProbeResponse {
            status: response.status().as_u16(),
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_construction() {
        assert!(HeadLogoProbe::new(Duration::from_secs(5)).is_ok());
    }
}
