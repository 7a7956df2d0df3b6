//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Cloud classification endpoint.
pub const CLOUD_BASE_URL: &str = "https://classify.pictag.dev/";

/// Self-hosted inference server endpoint.
pub const LOCAL_BASE_URL: &str = "http://localhost:9001/";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for a [`crate::ClassificationModel`].
///
/// The endpoint selection (cloud vs. local inference server) is fixed at
/// construction. The dispatch URL cannot be built until both `name` and
/// `version` are known, either here or via
/// [`crate::ClassificationModel::load_model`].
#[derive(Clone)]
pub struct ClassifierConfig {
    /// Private API key. Redacted in `Debug` output, never logged.
    pub api_key: String,
    /// Model identifier in `<workspace>/<slug>` form.
    pub model_id: String,
    /// Dataset slug.
    pub name: Option<String>,
    /// Model version.
    pub version: Option<String>,
    /// Base URL requests are dispatched to.
    pub base_url: String,
    /// Request timeout for classification calls.
    pub timeout: Duration,
}

impl ClassifierConfig {
    /// Create a configuration.
    ///
    /// `local` routes requests to a local inference server instead of the
    /// cloud endpoint.
    pub fn new(api_key: impl Into<String>, model_id: impl Into<String>, local: bool) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: model_id.into(),
            name: None,
            version: None,
            base_url: if local { LOCAL_BASE_URL } else { CLOUD_BASE_URL }.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the dataset slug and model version.
    pub fn with_model(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.version = Some(version.into());
        self
    }

    /// Override the base URL (self-hosted deployments, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `PICTAG_API_KEY`, `PICTAG_MODEL_ID`, and optionally
    /// `PICTAG_LOCAL` and `PICTAG_TIMEOUT_SECS`.
    pub fn from_env() -> ClientResult<Self> {
        let api_key = std::env::var("PICTAG_API_KEY")
            .map_err(|_| ClientError::config_error("PICTAG_API_KEY not set"))?;
        let model_id = std::env::var("PICTAG_MODEL_ID")
            .map_err(|_| ClientError::config_error("PICTAG_MODEL_ID not set"))?;
        let local = std::env::var("PICTAG_LOCAL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut config = Self::new(api_key, model_id, local);
        if let Some(secs) = std::env::var("PICTAG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClassifierConfig::new("key", "ws/animals", false);
        assert_eq!(config.base_url, CLOUD_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.name, None);
        assert_eq!(config.version, None);
    }

    #[test]
    fn test_local_flag_routes_to_localhost() {
        let config = ClassifierConfig::new("key", "ws/animals", true);
        assert_eq!(config.base_url, LOCAL_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClassifierConfig::new("super-secret", "ws/animals", false);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
