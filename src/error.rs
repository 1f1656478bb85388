//! Error types for the docsend-pdf library.
//!
//! Two error types reflect two layers of the fetch:
//!
//! * [`ResponseError`] — what the response validator concludes about a
//!   completed HTTP exchange. It is a plain value (`Clone + PartialEq`) so
//!   [`crate::response::validate`] stays a pure function that tests can
//!   compare directly.
//!
//! * [`DocsendPdfError`] — everything a caller of the top-level `fetch*`
//!   and `save_pdf` functions can see: input validation, the validator's
//!   verdicts, transport failures and local I/O.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the docsend-pdf library.
#[derive(Debug, Error)]
pub enum DocsendPdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// A required form field was blank. Detected before any network call.
    #[error("{0}")]
    Validation(String),

    // ── Conversion service errors ─────────────────────────────────────────
    /// The conversion service answered with a non-2xx status.
    #[error("Docsend2PDF API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered 2xx but the body is not a PDF.
    #[error("Unexpected content type from API: {content_type}")]
    UnexpectedContentType { content_type: String },

    // ── Transport errors ──────────────────────────────────────────────────
    /// Connection, TLS or body-read failure.
    #[error("Failed to reach '{endpoint}': {reason}\nCheck your internet connection.")]
    Network { endpoint: String, reason: String },

    /// The request did not complete within the configured timeout.
    #[error("Request to '{endpoint}' timed out after {secs}s\nIncrease --timeout.")]
    Timeout { endpoint: String, secs: u64 },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the downloaded PDF.
    #[error("Failed to write PDF file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocsendPdfError {
    /// The validation error raised for a blank URL field.
    pub fn missing_url() -> Self {
        DocsendPdfError::Validation("DocSend URL is required.".to_string())
    }
}

/// The response validator's verdict on a failed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Non-2xx status with the extracted (or raw) error message.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// 2xx status but `Content-Type` does not name a PDF.
    /// Empty when the header was absent.
    #[error("unexpected content type: {content_type:?}")]
    UnexpectedContentType { content_type: String },
}

impl ResponseError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseError::ApiError { status, .. } => Some(*status),
            ResponseError::UnexpectedContentType { .. } => None,
        }
    }
}

impl From<ResponseError> for DocsendPdfError {
    fn from(e: ResponseError) -> Self {
        match e {
            ResponseError::ApiError { status, message } => DocsendPdfError::Api { status, message },
            ResponseError::UnexpectedContentType { content_type } => {
                DocsendPdfError::UnexpectedContentType { content_type }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let e = DocsendPdfError::Api {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(e.to_string(), "Docsend2PDF API error 404: not found");
    }

    #[test]
    fn missing_url_display() {
        assert_eq!(
            DocsendPdfError::missing_url().to_string(),
            "DocSend URL is required."
        );
    }

    #[test]
    fn unexpected_content_type_display() {
        let e = DocsendPdfError::UnexpectedContentType {
            content_type: "text/html".into(),
        };
        assert!(e.to_string().contains("text/html"), "got: {e}");
    }

    #[test]
    fn timeout_display() {
        let e = DocsendPdfError::Timeout {
            endpoint: "https://docsend2pdf.com/api/convert".into(),
            secs: 120,
        };
        assert!(e.to_string().contains("120s"));
        assert!(e.to_string().contains("docsend2pdf.com"));
    }

    #[test]
    fn response_error_converts_to_matching_variant() {
        let e: DocsendPdfError = ResponseError::ApiError {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert!(matches!(e, DocsendPdfError::Api { status: 500, ref message } if message == "boom"));

        let e: DocsendPdfError = ResponseError::UnexpectedContentType {
            content_type: String::new(),
        }
        .into();
        assert!(matches!(e, DocsendPdfError::UnexpectedContentType { ref content_type } if content_type.is_empty()));
    }

    #[test]
    fn status_only_on_api_error() {
        let api = ResponseError::ApiError {
            status: 403,
            message: "forbidden".into(),
        };
        let ct = ResponseError::UnexpectedContentType {
            content_type: "text/html".into(),
        };
        assert_eq!(api.status(), Some(403));
        assert_eq!(ct.status(), None);
    }
}
