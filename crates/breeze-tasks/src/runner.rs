use crate::builder::BreezeBuilder;
use crate::error::{Result, TaskError};
use crate::pipeline::TaskPipeline;
use crate::source::ContentSource;
use breeze_llm::{Availability, LANGUAGE_MODEL};
use breeze_types::{Artifact, BlogCategory, GenerationMode, PageContent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the side panel asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BlogCategory>,
}

impl GenerationRequest {
    pub fn blog(category: BlogCategory) -> Self {
        Self {
            mode: GenerationMode::Blog,
            category: Some(category),
        }
    }

    pub fn keywords() -> Self {
        Self {
            mode: GenerationMode::Keywords,
            category: None,
        }
    }

    pub fn social_post() -> Self {
        Self {
            mode: GenerationMode::SocialPost,
            category: None,
        }
    }

    /// Build a request from the category label selected in the panel
    pub fn parse(mode: GenerationMode, category: Option<&str>) -> Result<Self> {
        let category = category.map(str::parse::<BlogCategory>).transpose()?;
        Ok(Self { mode, category })
    }
}

/// Entry point for generation requests from the side panel
pub struct Breeze {
    pipeline: TaskPipeline,
    content_source: Arc<dyn ContentSource>,
}

impl Breeze {
    pub(crate) fn from_parts(pipeline: TaskPipeline, content_source: Arc<dyn ContentSource>) -> Self {
        Self {
            pipeline,
            content_source,
        }
    }

    /// Create a builder for fluent construction
    pub fn builder() -> BreezeBuilder {
        BreezeBuilder::new()
    }

    pub fn pipeline(&self) -> &TaskPipeline {
        &self.pipeline
    }

    /// Readiness of the prompt capability, for the panel's status display
    pub async fn language_model_availability(&self) -> Availability {
        self.pipeline
            .selector()
            .resolve_availability(LANGUAGE_MODEL)
            .await
    }

    /// Run one request: drop the previous session, read the active page,
    /// summarize it, then generate the requested artifact.
    pub async fn generate(&self, request: GenerationRequest) -> Result<Artifact> {
        let category = match (request.mode.requires_category(), request.category) {
            (true, None) => return Err(TaskError::MissingCategory),
            (true, category) => category,
            (false, _) => None,
        };

        tracing::info!(mode = ?request.mode, category = ?category, "generation started");

        self.pipeline.sessions().destroy_session().await;

        let page = match self.content_source.active_page_content().await {
            Ok(page) => page,
            Err(e) => {
                // Pages without a content script (chrome://, file://) have no text
                tracing::warn!("page content unavailable: {}", e);
                PageContent::default()
            }
        };
        let meta = page.meta();

        let summary = self
            .pipeline
            .summarize_page(page.source_text(), &meta)
            .await?;

        let text = match (request.mode, category) {
            (GenerationMode::Blog, Some(category)) => {
                self.pipeline.generate_blog(&summary, category, &meta).await?
            }
            (GenerationMode::Blog, None) => return Err(TaskError::MissingCategory),
            (GenerationMode::Keywords, _) => self.pipeline.generate_keywords(&summary).await?,
            (GenerationMode::SocialPost, _) => {
                self.pipeline.generate_social_post(&summary, &meta).await?
            }
        };

        tracing::info!(mode = ?request.mode, chars = text.chars().count(), "generation finished");
        Ok(Artifact::new(request.mode, category, text))
    }
}
