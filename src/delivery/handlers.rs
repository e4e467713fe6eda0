use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::http::StatusCode;
use actix_web::{error, web, HttpResponse, Responder};

use super::models::{HealthResponse, NoticeResponse, PreviewResponse};
use super::page;
use crate::notice::common::PDF_MIME_TYPE;
use crate::notice::{NoticeError, NoticeRequest};
use crate::{AppState, ErrorResponse};

/// Body limit for form and JSON submissions. Grounds for eviction is free text.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

fn error_status(err: &NoticeError) -> StatusCode {
    match err {
        NoticeError::Invalid(_) => StatusCode::BAD_REQUEST,
        NoticeError::Refine(_) | NoticeError::Export(_) => StatusCode::BAD_GATEWAY,
        NoticeError::TemplateSlot(_) | NoticeError::ExportTask(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn json_error(err: &NoticeError) -> HttpResponse {
    let status = error_status(err);
    let message = err.to_string();
    let body = match status {
        StatusCode::BAD_REQUEST => ErrorResponse::bad_request(&message),
        StatusCode::BAD_GATEWAY => ErrorResponse::bad_gateway(&message),
        _ => ErrorResponse::internal_error(&message),
    };
    HttpResponse::build(status).json(body)
}

/// The notice form - GET /
pub async fn form_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::FORM_PAGE)
}

/// Form submission - POST /notice
///
/// Answers with the preview and download link, or with an error page that
/// offers nothing to download.
pub async fn submit_form(
    state: web::Data<AppState>,
    form: web::Form<NoticeRequest>,
) -> impl Responder {
    match state.pipeline.generate(form.into_inner()).await {
        Ok(notice) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(page::result_page(&notice)),
        Err(e) => {
            log::warn!("form submission failed: {}", e);
            HttpResponse::build(error_status(&e))
                .content_type(ContentType::html())
                .body(page::error_page(&e.to_string()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/notices",
    tag = "Eviction Notice",
    request_body = NoticeRequest,
    responses(
        (status = 200, description = "Notice generated", body = NoticeResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Generation service or PDF converter failed", body = ErrorResponse)
    )
)]
pub async fn create_notice(
    state: web::Data<AppState>,
    body: web::Json<NoticeRequest>,
) -> impl Responder {
    match state.pipeline.generate(body.into_inner()).await {
        Ok(notice) => HttpResponse::Ok().json(NoticeResponse::from(notice)),
        Err(e) => json_error(&e),
    }
}

#[utoipa::path(
    post,
    path = "/api/notices/pdf",
    tag = "Eviction Notice",
    request_body = NoticeRequest,
    responses(
        (status = 200, description = "Notice PDF", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Generation service or PDF converter failed", body = ErrorResponse)
    )
)]
pub async fn download_notice_pdf(
    state: web::Data<AppState>,
    body: web::Json<NoticeRequest>,
) -> impl Responder {
    match state.pipeline.generate(body.into_inner()).await {
        Ok(notice) => HttpResponse::Ok()
            .content_type(PDF_MIME_TYPE)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(notice.filename)],
            })
            .body(notice.pdf),
        Err(e) => json_error(&e),
    }
}

#[utoipa::path(
    post,
    path = "/api/notices/preview",
    tag = "Eviction Notice",
    request_body = NoticeRequest,
    responses(
        (status = 200, description = "Assembled notice text, no external calls", body = PreviewResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn preview_notice(
    state: web::Data<AppState>,
    body: web::Json<NoticeRequest>,
) -> impl Responder {
    match state.pipeline.preview(body.into_inner()) {
        Ok(text) => HttpResponse::Ok().json(PreviewResponse { text }),
        Err(e) => json_error(&e),
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Eviction Notice",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        refiner: state.pipeline.refiner_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Reports unreadable form bodies as an HTML page, like pipeline failures.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            let message = format!("Could not read the submitted form: {}", err);
            let response = HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(page::error_page(&message));
            error::InternalError::from_response(err, response).into()
        })
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
                "Invalid JSON body: {}",
                err
            )));
            error::InternalError::from_response(err, response).into()
        })
}

/// Configure the browser form routes (mounted at the root)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(web::resource("/").route(web::get().to(form_page)))
        .service(web::resource("/notice").route(web::post().to(submit_form)));
}

/// Configure the JSON API routes (mounted under /api)
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/notices").route(web::post().to(create_notice)))
        .service(web::resource("/notices/pdf").route(web::post().to(download_notice_pdf)))
        .service(web::resource("/notices/preview").route(web::post().to(preview_notice)))
        .service(web::resource("/health").route(web::get().to(health)));
}
