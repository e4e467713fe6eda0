//! Google Gemini `generateContent` client.
//!
//! Sends the system directive and a single user message (the assembled
//! notice) with no prior conversation, and returns the plain-text reply.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::config::{GenerationConfig, DEFAULT_BASE_URL};
use super::RefineError;
use crate::notice::traits::NoticeRefiner;

/// Refines notices through the Gemini REST API.
pub struct GeminiRefiner {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    config: GenerationConfig,
}

impl GeminiRefiner {
    pub fn new(api_key: impl Into<String>, config: GenerationConfig) -> Result<Self, RefineError> {
        Self::with_base_url(api_key, config, DEFAULT_BASE_URL)
    }

    /// `base_url` should be like `https://generativelanguage.googleapis.com`
    /// (no trailing slash needed).
    pub fn with_base_url(
        api_key: impl Into<String>,
        config: GenerationConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, RefineError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("eviction-notice-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RefineError::Client)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        )
    }

    fn request_body<'a>(&'a self, text: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &self.config.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text }],
            }],
            generation_config: GenerationParams {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
                max_output_tokens: self.config.max_output_tokens,
                response_mime_type: &self.config.response_mime_type,
            },
        }
    }
}

#[async_trait]
impl NoticeRefiner for GeminiRefiner {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn refine(&self, text: &str) -> Result<String, RefineError> {
        log::info!("sending notice to {} ({} bytes)", self.config.model, text.len());

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let body = resp.text().await.map_err(classify_transport_error)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| RefineError::MalformedResponse(e.to_string()))?;

        let refined = extract_text(parsed)?;
        log::info!("received refined notice ({} bytes)", refined.len());
        Ok(refined)
    }
}

fn classify_transport_error(err: reqwest::Error) -> RefineError {
    if err.is_timeout() {
        RefineError::Timeout
    } else {
        RefineError::Network(err)
    }
}

fn classify_status(status: StatusCode, body: &str) -> RefineError {
    let message = error_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RefineError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => RefineError::RateLimited(message),
        // An invalid key comes back as 400 INVALID_ARGUMENT
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            RefineError::Unauthorized(message)
        }
        _ => RefineError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pull `error.message` out of a Google API error body, falling back to the
/// raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.trim().to_string())
}

fn extract_text(response: GenerateContentResponse) -> Result<String, RefineError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(RefineError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(RefineError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => return Err(RefineError::Truncated),
        Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
            return Err(RefineError::Blocked(reason.to_string()));
        }
        _ => {}
    }

    if text.trim().is_empty() {
        return Err(RefineError::EmptyResponse);
    }

    Ok(text)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationParams<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParams<'a> {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}
