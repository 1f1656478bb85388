//! # docsend-pdf
//!
//! Fetch a DocSend link as a PDF through the docsend2pdf conversion API.
//!
//! The conversion happens entirely server-side. This crate builds the
//! request payload, performs one POST, and classifies the response as
//! either a PDF or a readable error.
//!
//! ## Flow
//!
//! ```text
//! form input
//!  │
//!  ├─ 1. Request   trim + validate URL, drop blank email/passcode
//!  ├─ 2. POST      {url, searchable: false, email?, passcode?}
//!  ├─ 3. Validate  status → content type → opaque PDF bytes
//!  └─ 4. Output    <name>.pdf or <YYMMDD_HHMM>_Document.pdf
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsend_pdf::{fetch_pdf, save_pdf, default_download_file_name, FetchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetchConfig::default();
//!     let pdf = fetch_pdf("https://docsend.com/view/abc123", Some("me@example.com"), None, &config).await?;
//!     let path = save_pdf(&pdf, ".", &default_download_file_name(None))?;
//!     eprintln!("saved {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docsend-pdf` binary (clap + anyhow + tracing-subscriber + indicatif + dialoguer) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod request;
pub mod response;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use client::{fetch_pdf, fetch_pdf_sync, DocsendClient};
pub use config::{FetchConfig, FetchConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use error::{DocsendPdfError, ResponseError};
pub use output::{default_download_file_name, download_file_name, save_pdf};
pub use request::ConversionRequest;
pub use response::{validate, ConversionResult, PdfDocument};
