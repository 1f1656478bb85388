//! Response validation: classify a finished HTTP exchange.
//!
//! [`validate`] is a pure function of `(status, headers, body)`. It does not
//! look inside the PDF; the body is passed through byte-for-byte.

use crate::error::ResponseError;
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;

/// MIME type the service must declare on success.
pub const PDF_MIME: &str = "application/pdf";

/// The outcome of a conversion.
pub type ConversionResult = Result<PdfDocument, ResponseError>;

/// An opaque PDF payload returned by the conversion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    bytes: Bytes,
}

impl PdfDocument {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        PDF_MIME
    }
}

/// Classify a response from the conversion service.
///
/// 1. Non-2xx → [`ResponseError::ApiError`] with the JSON `error` field, or
///    the raw body text when that cannot be extracted.
/// 2. 2xx without `application/pdf` in `Content-Type` →
///    [`ResponseError::UnexpectedContentType`] (empty when absent).
/// 3. Otherwise the body, untouched.
pub fn validate(status: StatusCode, headers: &HeaderMap, body: Bytes) -> ConversionResult {
    if !status.is_success() {
        return Err(ResponseError::ApiError {
            status: status.as_u16(),
            message: extract_error_message(&body),
        });
    }

    let content_type = content_type(headers);
    if !content_type.contains(PDF_MIME) {
        return Err(ResponseError::UnexpectedContentType { content_type });
    }

    Ok(PdfDocument::new(body))
}

/// The `error` field of a JSON object body, falling back to the raw text.
pub fn extract_error_message(body: &[u8]) -> String {
    json_error_field(body).unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn json_error_field(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.as_object()?.get("error")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `Content-Type` as text; empty when missing. Non-UTF-8 bytes are replaced.
fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}
