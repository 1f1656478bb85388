//! Request builder: turn form input into the conversion service payload.
//!
//! The service treats the *presence* of `email` or `passcode` as a signal to
//! attempt gated access, regardless of the value. Blank inputs are therefore
//! normalised to `None` and skipped during serialisation instead of being
//! sent as `""` or `null`.

use crate::error::DocsendPdfError;
use serde::Serialize;

/// JSON body posted to the conversion endpoint.
///
/// Serialises to `{"url", "searchable", "email"?, "passcode"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    url: String,
    /// Always false: no OCR text layer, faster conversion.
    searchable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    passcode: Option<String>,
}

impl ConversionRequest {
    /// Validate the URL and build the request.
    ///
    /// This is the short-circuit the UI runs before touching the network:
    /// a blank URL yields [`DocsendPdfError::Validation`].
    pub fn new(
        url: &str,
        email: Option<&str>,
        passcode: Option<&str>,
    ) -> Result<Self, DocsendPdfError> {
        if url.trim().is_empty() {
            return Err(DocsendPdfError::missing_url());
        }
        Ok(Self::build(url, email, passcode))
    }

    /// Build the request without validating the URL.
    ///
    /// Callers must have rejected a blank URL already; use [`Self::new`]
    /// when that is not guaranteed.
    pub fn build(url: &str, email: Option<&str>, passcode: Option<&str>) -> Self {
        Self {
            url: url.trim().to_string(),
            searchable: false,
            email: normalize_optional(email),
            passcode: normalize_optional(passcode),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn passcode(&self) -> Option<&str> {
        self.passcode.as_deref()
    }

    pub fn searchable(&self) -> bool {
        self.searchable
    }

    /// Names of the payload keys that will be sent, in serialisation order.
    pub fn payload_keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["url", "searchable"];
        if self.email.is_some() {
            keys.push("email");
        }
        if self.passcode.is_some() {
            keys.push("passcode");
        }
        keys
    }
}

/// Trim an optional form field; blank or whitespace-only becomes `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
