//! Generation module - optional refinement of the assembled notice by a
//! hosted text-generation model.

pub mod config;
pub mod gemini;

pub use config::GenerationConfig;
pub use gemini::GeminiRefiner;

use async_trait::async_trait;
use thiserror::Error;

use crate::notice::traits::NoticeRefiner;

/// Errors returned by a refiner. None of them are retried.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("generation request timed out")]
    Timeout,
    #[error("could not reach generation service: {0}")]
    Network(#[source] reqwest::Error),
    #[error("generation service rejected the API key: {0}")]
    Unauthorized(String),
    #[error("generation service rate limit reached: {0}")]
    RateLimited(String),
    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("generation blocked by the service: {0}")]
    Blocked(String),
    #[error("generated notice was cut off at the output limit")]
    Truncated,
    #[error("generation service returned no text")]
    EmptyResponse,
    #[error("could not parse generation response: {0}")]
    MalformedResponse(String),
}

/// Passes the assembled notice through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRefiner;

#[async_trait]
impl NoticeRefiner for IdentityRefiner {
    fn name(&self) -> &'static str {
        "identity"
    }

    async fn refine(&self, text: &str) -> Result<String, RefineError> {
        Ok(text.to_string())
    }
}
