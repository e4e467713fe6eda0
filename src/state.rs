//! Shared application state handed to every handler.

use anyhow::Context;
use std::sync::Arc;

use crate::config::{AppConfig, RefinementMode};
use crate::generation::{GeminiRefiner, IdentityRefiner};
use crate::notice::{LetterheadRenderer, NoticePipeline, NoticeRefiner, WkhtmltopdfConverter};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: NoticePipeline,
}

impl AppState {
    pub fn new(pipeline: NoticePipeline) -> Self {
        Self { pipeline }
    }

    /// Wire the production collaborators described by `config`.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let refiner: Arc<dyn NoticeRefiner> = match &config.refinement {
            RefinementMode::Gemini {
                api_key,
                base_url,
                generation,
            } => Arc::new(
                GeminiRefiner::with_base_url(api_key.clone(), generation.clone(), base_url.clone())
                    .context("failed to create Gemini client")?,
            ),
            RefinementMode::Off => {
                log::warn!("notice refinement is off, assembled text is rendered unchanged");
                Arc::new(IdentityRefiner)
            }
        };

        let renderer = LetterheadRenderer::new(&config.letterhead_primary, &config.letterhead_accent)
            .context("failed to load letterhead template")?;

        let converter = Arc::new(WkhtmltopdfConverter::new(&config.wkhtmltopdf_path));

        log::info!(
            "notice pipeline ready (refiner: {}, converter: {})",
            refiner.name(),
            converter.binary().display()
        );

        Ok(Self::new(NoticePipeline::new(refiner, renderer, converter)))
    }
}
