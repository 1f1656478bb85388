//! HTTP client for the conversion service.
//!
//! One POST per fetch. The full response is read into memory and handed to
//! [`crate::response::validate`]; this module only adds transport concerns
//! (timeout, connection errors) on top of the pure request/response logic.

use crate::config::FetchConfig;
use crate::error::DocsendPdfError;
use crate::request::ConversionRequest;
use crate::response::{validate, PdfDocument};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A reusable client bound to one [`FetchConfig`].
#[derive(Debug, Clone)]
pub struct DocsendClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl DocsendClient {
    /// Build the underlying `reqwest::Client` with the configured timeout.
    pub fn new(config: FetchConfig) -> Result<Self, DocsendPdfError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DocsendPdfError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Post `request` to the conversion endpoint and validate the response.
    pub async fn fetch(&self, request: &ConversionRequest) -> Result<PdfDocument, DocsendPdfError> {
        let start = Instant::now();
        let endpoint = self.config.endpoint.as_str();
        info!("Requesting PDF for: {}", request.url());
        debug!("Payload keys: {:?}", request.payload_keys());

        let response = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        debug!("Response: HTTP {} ({} bytes)", status, body.len());

        match validate(status, &headers, body) {
            Ok(doc) => {
                info!(
                    "Received PDF: {} bytes in {}ms",
                    doc.len(),
                    start.elapsed().as_millis()
                );
                Ok(doc)
            }
            Err(e) => {
                warn!("Conversion failed: {}", e);
                Err(e.into())
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> DocsendPdfError {
        if e.is_timeout() {
            DocsendPdfError::Timeout {
                endpoint: self.config.endpoint.clone(),
                secs: self.config.timeout_secs,
            }
        } else {
            DocsendPdfError::Network {
                endpoint: self.config.endpoint.clone(),
                reason: e.to_string(),
            }
        }
    }
}

/// Fetch the PDF for a DocSend link.
///
/// This is the primary entry point for the library. A blank `url` is
/// rejected with [`DocsendPdfError::Validation`] before any network call;
/// blank `email`/`passcode` are treated as not supplied.
///
/// # Example
/// ```rust,no_run
/// use docsend_pdf::{fetch_pdf, FetchConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FetchConfig::default();
/// let pdf = fetch_pdf("https://docsend.com/view/abc123", None, None, &config).await?;
/// std::fs::write("deck.pdf", pdf.bytes())?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_pdf(
    url: &str,
    email: Option<&str>,
    passcode: Option<&str>,
    config: &FetchConfig,
) -> Result<PdfDocument, DocsendPdfError> {
    let request = ConversionRequest::new(url, email, passcode)?;
    DocsendClient::new(config.clone())?.fetch(&request).await
}

/// Synchronous wrapper around [`fetch_pdf`].
///
/// Creates a temporary tokio runtime internally.
pub fn fetch_pdf_sync(
    url: &str,
    email: Option<&str>,
    passcode: Option<&str>,
    config: &FetchConfig,
) -> Result<PdfDocument, DocsendPdfError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| DocsendPdfError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(fetch_pdf(url, email, passcode, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_url_never_reaches_network() {
        // Unroutable endpoint: a network attempt would fail with Network, not Validation.
        let config = FetchConfig::builder()
            .endpoint("http://127.0.0.1:1/api/convert")
            .build()
            .unwrap();
        let err = fetch_pdf("   ", Some("a@b.c"), None, &config).await.unwrap_err();
        assert!(matches!(err, DocsendPdfError::Validation(_)), "got: {err}");
    }

    #[test]
    fn client_keeps_config() {
        let config = FetchConfig::builder().timeout_secs(7).build().unwrap();
        let client = DocsendClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
