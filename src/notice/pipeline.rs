//! One submission, end to end: validate, assemble, refine, render, export.

use std::sync::Arc;
use uuid::Uuid;

use super::common::PDF_FILENAME;
use super::model::NoticeRequest;
use super::render::LetterheadRenderer;
use super::template::assemble;
use super::traits::{NoticeRefiner, PdfConverter};
use super::{GeneratedNotice, NoticeError};

/// Runs the notice stages in order and stops at the first failure.
///
/// Nothing is written outside the converter's own temporary directory, so
/// a failed run leaves no output behind and concurrent runs never share
/// files.
#[derive(Clone)]
pub struct NoticePipeline {
    refiner: Arc<dyn NoticeRefiner>,
    renderer: LetterheadRenderer,
    converter: Arc<dyn PdfConverter>,
}

impl NoticePipeline {
    pub fn new(
        refiner: Arc<dyn NoticeRefiner>,
        renderer: LetterheadRenderer,
        converter: Arc<dyn PdfConverter>,
    ) -> Self {
        Self {
            refiner,
            renderer,
            converter,
        }
    }

    pub fn refiner_name(&self) -> &'static str {
        self.refiner.name()
    }

    /// Validate and assemble only. No external service is contacted.
    pub fn preview(&self, request: NoticeRequest) -> Result<String, NoticeError> {
        let request = request.with_defaults();
        request.validate().map_err(NoticeError::Invalid)?;
        Ok(assemble(&request))
    }

    pub async fn generate(&self, request: NoticeRequest) -> Result<GeneratedNotice, NoticeError> {
        let run_id = Uuid::new_v4();
        let request = request.with_defaults();
        request.validate().map_err(NoticeError::Invalid)?;

        let assembled = assemble(&request);
        log::info!(
            "notice {}: assembled {} bytes, refining with {}",
            run_id,
            assembled.len(),
            self.refiner.name()
        );

        let text = self.refiner.refine(&assembled).await.map_err(|e| {
            log::error!("notice {}: refinement failed: {}", run_id, e);
            NoticeError::Refine(e)
        })?;

        let html = self.renderer.render(&text);

        let converter = Arc::clone(&self.converter);
        let html_for_export = html.clone();
        let pdf = tokio::task::spawn_blocking(move || converter.convert(&html_for_export))
            .await
            .map_err(|e| NoticeError::ExportTask(e.to_string()))?
            .map_err(|e| {
                log::error!("notice {}: PDF export failed: {}", run_id, e);
                NoticeError::Export(e)
            })?;

        log::info!("notice {}: produced {} byte PDF", run_id, pdf.len());

        Ok(GeneratedNotice {
            filename: PDF_FILENAME.to_string(),
            text,
            html,
            pdf,
        })
    }
}
