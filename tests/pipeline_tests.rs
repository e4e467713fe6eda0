mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{
    pipeline, sample_request, MissingBinaryConverter, PrefixRefiner, RecordingConverter,
    TimeoutRefiner, FAKE_PDF,
};
use eviction_notice_server::generation::{IdentityRefiner, RefineError};
use eviction_notice_server::notice::{ExportError, NoticeError, NoticeRequest, WkhtmltopdfConverter};

#[tokio::test]
async fn test_generate_success() {
    let converter = Arc::new(RecordingConverter::default());
    let pipeline = pipeline(Arc::new(PrefixRefiner), converter.clone());

    let notice = pipeline.generate(sample_request()).await.unwrap();

    assert_eq!(notice.filename, "eviction_notice.pdf");
    assert_eq!(notice.pdf, FAKE_PDF);
    assert!(notice.text.starts_with("REFINED\n"));
    assert!(notice.html.contains("REFINED\n[Your Name]\nJohn Smith"));
    assert!(notice.html.contains("lawfirm"));

    // The converter saw exactly the rendered document
    let inputs = converter.inputs.lock().unwrap();
    assert_eq!(inputs.as_slice(), &[notice.html.clone()]);
}

#[tokio::test]
async fn test_generation_failure_stops_before_render_and_export() {
    let refiner = Arc::new(TimeoutRefiner::new());
    let converter = Arc::new(RecordingConverter::default());
    let pipeline = pipeline(refiner.clone(), converter.clone());

    let err = pipeline.generate(sample_request()).await.unwrap_err();

    assert!(matches!(err, NoticeError::Refine(RefineError::Timeout)));
    assert_eq!(refiner.calls.load(Ordering::SeqCst), 1);
    assert_eq!(converter.calls(), 0);
}

#[tokio::test]
async fn test_invalid_notice_period_rejected_before_refinement() {
    let refiner = Arc::new(TimeoutRefiner::new());
    let converter = Arc::new(RecordingConverter::default());
    let pipeline = pipeline(refiner.clone(), converter.clone());

    let request = NoticeRequest {
        notice_period: 0,
        ..sample_request()
    };
    let err = pipeline.generate(request).await.unwrap_err();

    assert!(matches!(err, NoticeError::Invalid(_)));
    assert_eq!(refiner.calls.load(Ordering::SeqCst), 0);
    assert_eq!(converter.calls(), 0);
}

#[tokio::test]
async fn test_missing_converter_is_reported() {
    let pipeline = pipeline(Arc::new(IdentityRefiner), Arc::new(MissingBinaryConverter));

    let err = pipeline.generate(sample_request()).await.unwrap_err();

    assert!(matches!(err, NoticeError::Export(ExportError::Spawn { .. })));
    assert!(err.to_string().starts_with("PDF export failed"));
}

#[tokio::test]
async fn test_real_converter_with_missing_binary() {
    let converter = Arc::new(WkhtmltopdfConverter::new("/nonexistent/wkhtmltopdf"));
    let pipeline = pipeline(Arc::new(IdentityRefiner), converter);

    let err = pipeline.generate(sample_request()).await.unwrap_err();
    assert!(matches!(err, NoticeError::Export(ExportError::Spawn { .. })));
}

#[tokio::test]
async fn test_runs_do_not_share_output() {
    let converter = Arc::new(RecordingConverter::default());
    let pipeline = pipeline(Arc::new(IdentityRefiner), converter.clone());

    let first = NoticeRequest {
        tenant_name: "First Tenant".to_string(),
        ..sample_request()
    };
    let second = NoticeRequest {
        tenant_name: "Second Tenant".to_string(),
        ..sample_request()
    };

    let (a, b) = tokio::join!(pipeline.generate(first), pipeline.generate(second));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert!(a.html.contains("Dear First Tenant,"));
    assert!(!a.html.contains("Second Tenant"));
    assert!(b.html.contains("Dear Second Tenant,"));
    assert_eq!(converter.calls(), 2);
}

#[test]
fn test_preview_skips_external_calls() {
    let refiner = Arc::new(TimeoutRefiner::new());
    let converter = Arc::new(RecordingConverter::default());
    let pipeline = pipeline(refiner.clone(), converter.clone());

    let text = pipeline.preview(sample_request()).unwrap();

    assert!(text.contains("Dear Jane Doe,"));
    assert_eq!(refiner.calls.load(Ordering::SeqCst), 0);
    assert_eq!(converter.calls(), 0);
}

#[test]
fn test_preview_fills_default_date() {
    let pipeline = pipeline(Arc::new(IdentityRefiner), Arc::new(RecordingConverter::default()));
    let request = NoticeRequest {
        date: String::new(),
        ..sample_request()
    };

    let text = pipeline.preview(request).unwrap();
    let date_line = text
        .lines()
        .skip_while(|line| *line != "[Date]")
        .nth(1)
        .unwrap();
    assert_eq!(date_line.len(), 10);
}
