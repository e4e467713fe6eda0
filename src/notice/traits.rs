//! Seams of the notice pipeline.

use async_trait::async_trait;

use super::export::ExportError;
use crate::generation::RefineError;

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Turns an assembled notice into the final notice text.
#[async_trait]
pub trait NoticeRefiner: Send + Sync {
    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn refine(&self, text: &str) -> Result<String, RefineError>;
}

/// Converts a complete HTML document into PDF bytes.
///
/// Implementations block; callers run them off the async executor.
pub trait PdfConverter: Send + Sync {
    fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}
