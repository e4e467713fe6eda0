//! Stub collaborators shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use eviction_notice_server::generation::RefineError;
use eviction_notice_server::notice::render::{DEFAULT_LETTERHEAD_ACCENT, DEFAULT_LETTERHEAD_PRIMARY};
use eviction_notice_server::notice::{
    ExportError, LetterheadRenderer, NoticePipeline, NoticeRefiner, NoticeRequest, PdfConverter,
};

pub const FAKE_PDF: &[u8] = b"%PDF-1.4\n% test document\n";

/// Fails every call as if the generation service timed out.
pub struct TimeoutRefiner {
    pub calls: AtomicUsize,
}

impl TimeoutRefiner {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl NoticeRefiner for TimeoutRefiner {
    fn name(&self) -> &'static str {
        "timeout"
    }

    async fn refine(&self, _text: &str) -> Result<String, RefineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RefineError::Timeout)
    }
}

/// Prefixes the text so tests can tell refined output from the input.
pub struct PrefixRefiner;

#[async_trait]
impl NoticeRefiner for PrefixRefiner {
    fn name(&self) -> &'static str {
        "prefix"
    }

    async fn refine(&self, text: &str) -> Result<String, RefineError> {
        Ok(format!("REFINED\n{text}"))
    }
}

/// Returns a fixed PDF and keeps every HTML document it was given.
#[derive(Default)]
pub struct RecordingConverter {
    pub inputs: Mutex<Vec<String>>,
}

impl RecordingConverter {
    pub fn calls(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl PdfConverter for RecordingConverter {
    fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        self.inputs.lock().unwrap().push(html.to_string());
        Ok(FAKE_PDF.to_vec())
    }
}

/// Behaves like a host without the converter binary installed.
pub struct MissingBinaryConverter;

impl PdfConverter for MissingBinaryConverter {
    fn convert(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Spawn {
            binary: "wkhtmltopdf".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        })
    }
}

pub fn renderer() -> LetterheadRenderer {
    LetterheadRenderer::new(DEFAULT_LETTERHEAD_PRIMARY, DEFAULT_LETTERHEAD_ACCENT)
        .expect("letterhead template should load")
}

pub fn pipeline(refiner: Arc<dyn NoticeRefiner>, converter: Arc<dyn PdfConverter>) -> NoticePipeline {
    NoticePipeline::new(refiner, renderer(), converter)
}

pub fn sample_request() -> NoticeRequest {
    NoticeRequest {
        your_name: "John Smith".to_string(),
        your_address: "1 Main St".to_string(),
        city_state_zip: "Springfield, IL 62701".to_string(),
        email: "john@example.com".to_string(),
        phone: "555-0100".to_string(),
        date: "2024-04-01".to_string(),
        tenant_name: "Jane Doe".to_string(),
        tenant_address: "12 Oak St".to_string(),
        tenant_city_state_zip: "Springfield, IL 62704".to_string(),
        date_of_lease: "2022-01-15".to_string(),
        grounds_for_eviction: "non-payment of rent".to_string(),
        notice_period: 30,
        outstanding_rent: "$1200".to_string(),
        rent_period: "March 2024".to_string(),
        inspection_date_time: "2024-04-20 10:00".to_string(),
        return_keys_date: "2024-05-01".to_string(),
        your_full_name: "John A. Smith".to_string(),
        your_signature: "J. Smith".to_string(),
    }
}
