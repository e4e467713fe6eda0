//! HTML to PDF export through `wkhtmltopdf`.
//!
//! Each conversion gets its own temporary directory holding the HTML input
//! and PDF output. The directory is removed when the converter returns,
//! whether or not the conversion succeeded.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};
use thiserror::Error;

use super::common::NOTICE_FILE_STEM;
use super::traits::PdfConverter;

pub const DEFAULT_WKHTMLTOPDF: &str = "wkhtmltopdf";

/// Errors raised while converting HTML to PDF.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write HTML document: {0}")]
    WriteHtml(#[source] std::io::Error),
    #[error("could not run PDF converter '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF converter exited with status {code}: {stderr}")]
    Exit { code: i32, stderr: String },
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("converter output is not a PDF document")]
    NotPdf,
}

/// Runs the `wkhtmltopdf` binary as a child process.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    binary: PathBuf,
}

impl WkhtmltopdfConverter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn run(&self, temp_dir: &TempDir, html_name: &str, pdf_name: &str) -> Result<(), ExportError> {
        let output = Command::new(&self.binary)
            .arg("--quiet")
            .arg("--encoding")
            .arg("utf-8")
            .arg(html_name)
            .arg(pdf_name)
            .current_dir(temp_dir.path())
            .output()
            .map_err(|source| ExportError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExportError::Exit { code, stderr });
        }

        Ok(())
    }
}

impl PdfConverter for WkhtmltopdfConverter {
    fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let temp_dir = tempdir().map_err(ExportError::TempDir)?;
        let html_name = format!("{NOTICE_FILE_STEM}.html");
        let pdf_name = format!("{NOTICE_FILE_STEM}.pdf");

        fs::write(temp_dir.path().join(&html_name), html).map_err(ExportError::WriteHtml)?;

        self.run(&temp_dir, &html_name, &pdf_name)?;

        let pdf = fs::read(temp_dir.path().join(&pdf_name)).map_err(ExportError::ReadPdf)?;
        if !is_pdf(&pdf) {
            return Err(ExportError::NotPdf);
        }

        log::debug!("wkhtmltopdf produced {} bytes", pdf.len());
        Ok(pdf)
    }
}

/// PDF magic bytes: %PDF
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(b"%PDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_reports_spawn_error() {
        let converter = WkhtmltopdfConverter::new("/nonexistent/bin/wkhtmltopdf");
        let err = converter.convert("<html></html>").unwrap_err();
        assert!(matches!(err, ExportError::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/bin/wkhtmltopdf"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_binary_reports_exit_status() {
        let converter = WkhtmltopdfConverter::new("false");
        let err = converter.convert("<html></html>").unwrap_err();
        assert!(matches!(err, ExportError::Exit { code: 1, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit_without_output_is_read_error() {
        // `true` exits 0 but never writes the PDF
        let converter = WkhtmltopdfConverter::new("true");
        let err = converter.convert("<html></html>").unwrap_err();
        assert!(matches!(err, ExportError::ReadPdf(_)));
    }

    #[test]
    fn test_binary_path() {
        let converter = WkhtmltopdfConverter::new("/usr/local/bin/wkhtmltopdf");
        assert_eq!(converter.binary(), Path::new("/usr/local/bin/wkhtmltopdf"));
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(b"%PDF-1.4\n"));
        assert!(!is_pdf(b"<html>"));
        assert!(!is_pdf(b""));
    }
}
