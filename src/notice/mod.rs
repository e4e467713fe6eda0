//! Notice module - assembling, rendering and exporting eviction notices.
//!
//! - `model` - the collected form fields and their validation
//! - `template` - the fixed plain-text letter
//! - `render` - the HTML letterhead shell
//! - `export` - HTML to PDF conversion
//! - `pipeline` - the whole flow for one submission

pub mod common;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod template;
pub mod traits;
pub mod validation;

pub use export::{ExportError, WkhtmltopdfConverter};
pub use model::NoticeRequest;
pub use pipeline::NoticePipeline;
pub use render::LetterheadRenderer;
pub use template::assemble;
pub use traits::{NoticeRefiner, PdfConverter, Validator};

use thiserror::Error;

use crate::generation::RefineError;

/// Errors that can occur while producing a notice.
#[derive(Debug, Error)]
pub enum NoticeError {
    #[error("{0}")]
    Invalid(String),
    #[error("letterhead template has no {0} slot")]
    TemplateSlot(&'static str),
    #[error("notice generation failed: {0}")]
    Refine(#[from] RefineError),
    #[error("PDF export failed: {0}")]
    Export(#[from] ExportError),
    #[error("PDF export task did not complete: {0}")]
    ExportTask(String),
}

/// Result of a successful pipeline run.
#[derive(Debug)]
pub struct GeneratedNotice {
    pub filename: String,
    /// Final notice text as returned by the refiner
    pub text: String,
    pub html: String,
    pub pdf: Vec<u8>,
}
