//! Logo Validation
//!
//! Decides whether a logo URL references a reachable image, retrying
//! transport failures under a bounded policy. Rejection never fails an
//! aggregation - the caller substitutes the placeholder instead.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{RetryPolicy, PLACEHOLDER_LOGO};
use crate::ports::logo::{LogoProbe, ProbeResponse};

/// File extensions accepted even when the server omits an image content-type.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "svg"];

/// Validates logo URLs with a bounded HEAD-probe retry loop.
pub struct LogoValidator {
    probe: Arc<dyn LogoProbe>,
    retry: RetryPolicy,
    placeholder: String,
}

impl LogoValidator {
    /// Default policy: 3 attempts, 1 second pause between them.
    pub fn new(probe: Arc<dyn LogoProbe>) -> Self {
        Self::with_policy(probe, RetryPolicy::new(3, Duration::from_secs(1)))
    }

    pub fn with_policy(probe: Arc<dyn LogoProbe>, retry: RetryPolicy) -> Self {
        Self {
            probe,
            retry,
            placeholder: PLACEHOLDER_LOGO.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Check that `url` is reachable and image-typed.
    ///
    /// Transport errors are retried per the policy; a response that reached
    /// the server (whatever its status) is a definitive verdict. Never
    /// errors - all failure paths resolve to `false`.
    pub async fn validate(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }

        match self.retry.run(|| self.probe.head(url)).await {
            Ok(response) => Self::accepts(url, &response),
            Err(e) => {
                tracing::debug!(url, error = %e, "logo probe failed after retries");
                false
            }
        }
    }

    /// Validate an optional URL, substituting the placeholder on rejection.
    pub async fn resolve(&self, url: Option<&str>) -> String {
        match url {
            Some(u) if self.validate(u).await => u.to_string(),
            Some(u) => {
                tracing::info!(url = u, "logo unreachable, using placeholder");
                self.placeholder.clone()
            }
            None => self.placeholder.clone(),
        }
    }

    fn accepts(url: &str, response: &ProbeResponse) -> bool {
        if !response.is_success() {
            return false;
        }

        let image_typed = response
            .content_type
            .as_deref()
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false);

        image_typed || has_image_extension(url)
    }
}

/// Check the URL path (query string and fragment excluded) against the
/// image extension allow-list.
fn has_image_extension(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let path = parsed.path().to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
}
