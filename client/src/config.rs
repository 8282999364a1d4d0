use std::time::Duration;

use url::Url;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the product API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    /// Request timeout. Native builds only; the browser's fetch has its own.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("cannot be a base URL".into()));
        }
        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the API URL: runtime `VITRINE_API_URL`, then the value baked in
    /// at compile time, then [`DEFAULT_API_URL`].
    ///
    /// `VITRINE_API_TIMEOUT_SECS` overrides the timeout when it parses.
    pub fn from_env() -> Result<Self, ClientError> {
        let url = std::env::var("VITRINE_API_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| {
                option_env!("VITRINE_API_URL")
                    .filter(|u| !u.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&url)?;
        if let Some(secs) = std::env::var("VITRINE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// `{base}/produtos/{id}`, keeping any path prefix on the base URL.
    pub fn product_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("produtos").push(id);
        }
        url
    }
}
