use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::notice::common::PDF_MIME_TYPE;
use crate::notice::GeneratedNotice;

/// A generated notice returned by the JSON API.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct NoticeResponse {
    pub filename: String,
    pub mime_type: String,
    /// Final notice text
    pub text: String,
    /// Rendered letterhead document
    pub html: String,
    /// PDF bytes, base64 (standard alphabet, padded)
    pub pdf_base64: String,
}

impl From<GeneratedNotice> for NoticeResponse {
    fn from(notice: GeneratedNotice) -> Self {
        Self {
            filename: notice.filename,
            mime_type: PDF_MIME_TYPE.to_string(),
            text: notice.text,
            html: notice.html,
            pdf_base64: STANDARD.encode(&notice.pdf),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PreviewResponse {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub refiner: String,
    pub version: String,
}
