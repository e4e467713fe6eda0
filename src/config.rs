//! Process configuration read from the environment (and `.env`).

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::generation::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::generation::GenerationConfig;
use crate::notice::export::DEFAULT_WKHTMLTOPDF;
use crate::notice::render::{DEFAULT_LETTERHEAD_ACCENT, DEFAULT_LETTERHEAD_PRIMARY};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY must be set when NOTICE_REFINEMENT is 'gemini'")]
    MissingApiKey,
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// How the assembled notice is finalised before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RefinementMode {
    Gemini {
        api_key: String,
        base_url: String,
        generation: GenerationConfig,
    },
    /// Render the assembled text as-is
    Off,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub refinement: RefinementMode,
    pub wkhtmltopdf_path: String,
    pub letterhead_primary: String,
    pub letterhead_accent: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => parse_value("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let mode = get("NOTICE_REFINEMENT").unwrap_or_else(|| "gemini".to_string());
        let refinement = match mode.trim().to_ascii_lowercase().as_str() {
            "gemini" => {
                let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
                let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
                    Some(value) => parse_value("GEMINI_TIMEOUT_SECS", &value)?,
                    None => DEFAULT_TIMEOUT_SECS,
                };
                let generation = GenerationConfig::default()
                    .with_model(get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
                    .with_timeout(Duration::from_secs(timeout_secs));

                RefinementMode::Gemini {
                    api_key,
                    base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                    generation,
                }
            }
            "off" | "none" | "identity" => RefinementMode::Off,
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "NOTICE_REFINEMENT",
                    value: mode,
                })
            }
        };

        let cors_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            refinement,
            wkhtmltopdf_path: get("WKHTMLTOPDF_PATH")
                .unwrap_or_else(|| DEFAULT_WKHTMLTOPDF.to_string()),
            letterhead_primary: get("LETTERHEAD_PRIMARY")
                .unwrap_or_else(|| DEFAULT_LETTERHEAD_PRIMARY.to_string()),
            // Read untrimmed so a leading space survives
            letterhead_accent: lookup("LETTERHEAD_ACCENT")
                .unwrap_or_else(|| DEFAULT_LETTERHEAD_ACCENT.to_string()),
            cors_origins,
        })
    }
}
