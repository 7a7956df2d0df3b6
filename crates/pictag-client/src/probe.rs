//! Remote image URL reachability checks.
//!
//! The classify precondition treats a missing local path as recoverable
//! when the reference turns out to be a reachable image URL. The check is a
//! trait so tests can stub it out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Capability for deciding whether a string names a reachable remote image.
#[async_trait]
pub trait ImageUrlCheck: Send + Sync {
    /// Whether `candidate` looks like an image URL the endpoint could fetch.
    async fn is_reachable_image(&self, candidate: &str) -> bool;

    /// Check name for logging.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Default check: URL syntax first, then a HEAD request.
///
/// A candidate passes when it parses as an http(s) URL, the HEAD request
/// succeeds, and the response `Content-Type` is an `image/*` type.
pub struct HttpImageProbe {
    http: reqwest::Client,
}

impl HttpImageProbe {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImageProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageUrlCheck for HttpImageProbe {
    async fn is_reachable_image(&self, candidate: &str) -> bool {
        let parsed = match Url::parse(candidate) {
            Ok(url) => url,
            Err(_) => return false,
        };
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return false;
        }

        match self
            .http
            .head(candidate)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.starts_with("image/"))
                .unwrap_or(false),
            Ok(response) => {
                debug!(status = %response.status(), "image URL probe rejected");
                false
            }
            Err(e) => {
                debug!("image URL probe failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "http-head"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_rejects_non_url_strings() {
        let probe = HttpImageProbe::new();
        assert!(!probe.is_reachable_image("photos/dog.jpg").await);
        assert!(!probe.is_reachable_image("not a url at all").await);
    }

    #[tokio::test]
    async fn test_probe_rejects_non_http_schemes() {
        let probe = HttpImageProbe::new();
        assert!(!probe.is_reachable_image("file:///etc/passwd").await);
        assert!(!probe.is_reachable_image("ftp://example.com/dog.jpg").await);
    }
}
