//! Download naming and writing the fetched PDF to disk.

use crate::error::DocsendPdfError;
use crate::response::PdfDocument;
use chrono::{DateTime, Local, TimeZone};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Suffix used when the user does not name the file.
pub const DEFAULT_FILE_SUFFIX: &str = "_Document.pdf";

/// File name for the download.
///
/// `<name>.pdf` for a non-blank `file_name` (trimmed), otherwise
/// `<YYMMDD_HHMM>_Document.pdf` stamped with `now`.
pub fn download_file_name<Tz: TimeZone>(file_name: Option<&str>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match file_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{name}.pdf"),
        None => format!("{}{}", now.format("%y%m%d_%H%M"), DEFAULT_FILE_SUFFIX),
    }
}

/// [`download_file_name`] stamped with the current local time.
pub fn default_download_file_name(file_name: Option<&str>) -> String {
    download_file_name(file_name, &Local::now())
}

/// Write `doc` to `dir/file_name`, replacing any existing file.
///
/// Uses atomic write (temp file in `dir` + rename) so an interrupted write
/// never leaves a truncated PDF behind.
pub fn save_pdf(
    doc: &PdfDocument,
    dir: impl AsRef<Path>,
    file_name: &str,
) -> Result<PathBuf, DocsendPdfError> {
    let dir = dir.as_ref();
    let path = dir.join(file_name);
    let write_err = |source: std::io::Error| DocsendPdfError::OutputWriteFailed {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".docsend-pdf")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(doc.bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(&path).map_err(|e| write_err(e.error))?;

    info!("Wrote {} bytes to {}", doc.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 59).unwrap()
    }

    #[test]
    fn custom_name_gets_pdf_extension() {
        assert_eq!(download_file_name(Some("  Series A deck "), &fixed_time()), "Series A deck.pdf");
    }

    #[test]
    fn blank_name_uses_timestamp() {
        assert_eq!(download_file_name(None, &fixed_time()), "240307_0905_Document.pdf");
        assert_eq!(download_file_name(Some("   "), &fixed_time()), "240307_0905_Document.pdf");
    }

    #[test]
    fn save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let doc = PdfDocument::new(b"%PDF-1.7 bytes".to_vec());
        let path = save_pdf(&doc, dir.path().join("nested"), "deck.pdf").unwrap();
        assert_eq!(path, dir.path().join("nested").join("deck.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 bytes");
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        save_pdf(&PdfDocument::new(b"old".to_vec()), dir.path(), "deck.pdf").unwrap();
        save_pdf(&PdfDocument::new(b"new".to_vec()), dir.path(), "deck.pdf").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("deck.pdf")]);
        assert_eq!(std::fs::read(dir.path().join("deck.pdf")).unwrap(), b"new");
    }

    #[test]
    fn save_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let err = save_pdf(&PdfDocument::new(b"%PDF".to_vec()), &blocker, "deck.pdf").unwrap_err();
        assert!(matches!(err, DocsendPdfError::OutputWriteFailed { .. }));
    }
}
