//! HTTP client wrapper for IMDS requests.

use std::time::Duration;

use reqwest::Client;

/// Default timeout for metadata requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default IMDS base URL (link-local address).
pub const DEFAULT_BASE_URL: &str = "http://169.254.169.254";

/// HTTP client wrapper for instance metadata service requests.
///
/// The timeout configured here is the only bound on the remote fetch; the
/// provider layer does not add its own timeout policy.
#[derive(Debug, Clone)]
pub struct ImdsClient {
    inner: Client,
    base_url: String,
}

impl ImdsClient {
    /// Create a new metadata client with the specified timeout and base URL.
    pub fn new(timeout: Duration, base_url: &str) -> Result<Self, reqwest::Error> {
        let inner = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(false)
            .build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new metadata client with the default timeout and base URL.
    pub fn with_default_timeout() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_BASE_URL)
    }

    /// Create a new metadata client with a custom base URL (for testing).
    pub fn with_base_url(base_url: &str) -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_TIMEOUT, base_url)
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ImdsClient {
    fn default() -> Self {
        Self::with_default_timeout().expect("failed to create HTTP client")
    }
}
