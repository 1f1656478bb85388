//! Configuration for talking to the conversion service.
//!
//! Everything the [`crate::client::DocsendClient`] needs lives in
//! [`FetchConfig`], built via its [`FetchConfigBuilder`]. There are only a
//! handful of knobs; the endpoint is fixed in production and overridden in
//! tests to point at a mock server.

use crate::error::DocsendPdfError;

/// The docsend2pdf conversion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://docsend2pdf.com/api/convert";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for a conversion request.
///
/// # Example
/// ```rust
/// use docsend_pdf::FetchConfig;
///
/// let config = FetchConfig::builder()
///     .timeout_secs(60)
///     .build()
///     .unwrap();
/// assert_eq!(config.timeout_secs, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Conversion API URL. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Whole-request timeout in seconds, covering connect, upload, the
    /// service's conversion time and the body download. Default: 120.
    ///
    /// Conversion of a long deck happens server-side while the request is
    /// open, so this is deliberately generous.
    pub timeout_secs: u64,

    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("docsend-pdf/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Create a new builder for `FetchConfig`.
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<FetchConfig, DocsendPdfError> {
        let c = &self.config;
        if c.timeout_secs == 0 {
            return Err(DocsendPdfError::InvalidConfig(
                "Timeout must be ≥ 1 second".into(),
            ));
        }
        let endpoint = c.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(DocsendPdfError::InvalidConfig(format!(
                "Endpoint must be an HTTP/HTTPS URL, got '{}'",
                c.endpoint
            )));
        }
        reqwest::Url::parse(endpoint).map_err(|e| {
            DocsendPdfError::InvalidConfig(format!("Invalid endpoint '{}': {}", c.endpoint, e))
        })?;

        let mut config = self.config;
        config.endpoint = config.endpoint.trim().to_string();
        Ok(config)
    }
}
