//! Sampling parameters and system directive for the generation model.

use std::time::Duration;

use crate::notice::template::CANONICAL_TEMPLATE;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const DIRECTIVE_PREAMBLE: &str = "Act as an expert lawyer who specialises in sending out eviction notices to tenants. Following is the format which has to be sent to the tenants. Take the inputs from the user about the details. The inputs from user are enclosed in \"[]\" square brackets. Use the template below and make a custom notice:";

/// Persona instruction plus the canonical layout the model must reproduce.
pub fn default_system_instruction() -> String {
    format!("{DIRECTIVE_PREAMBLE}\n\n\"\"\"\n{CANONICAL_TEMPLATE}\n\"\"\"\n")
}

/// Everything sent to the model besides the notice itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub system_instruction: String,
    pub model: String,
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
    /// Upper bound on a single generation request
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            system_instruction: default_system_instruction(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.6,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GenerationConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
