use crate::config::PipelineConfig;
use crate::error::{Result, TaskError};
use crate::selector::{AiBackend, BackendSelector, PromptSource};
use crate::session::SessionManager;
use crate::templates;
use crate::window::{self, SHORT_TRUNCATION_MARKER, SUMMARY_TRUNCATION_MARKER};
use breeze_llm::{
    HostCapabilities, PromptOptions, SummarizeOptions, LANGUAGE_MODEL, SUMMARIZER,
};
use breeze_types::{BlogCategory, PageMeta, TaskResult};
use std::sync::Arc;

/// Two-stage generation pipelines: summarize page text, then turn the
/// summary into an artifact.
///
/// Only the summarization stage recovers from backend failures; errors from
/// the generation stage reach the caller unmodified.
pub struct TaskPipeline {
    selector: BackendSelector,
    sessions: Arc<SessionManager>,
    config: PipelineConfig,
}

impl TaskPipeline {
    pub fn new(host: Arc<HostCapabilities>, sessions: Arc<SessionManager>) -> Self {
        Self {
            selector: BackendSelector::new(host),
            sessions,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn selector(&self) -> &BackendSelector {
        &self.selector
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Summarize with the host's structured summarizer.
    ///
    /// Fails when the host only offers generic prompting.
    pub async fn summarize(&self, input: &str, options: SummarizeOptions) -> Result<TaskResult> {
        let capability = match self.selector.resolve_summarizer().await? {
            AiBackend::StructuredSummarizer(capability) => capability,
            _ => return Err(TaskError::capability_unavailable(SUMMARIZER)),
        };

        let instance = capability.create(options).await?;
        let summary = instance.summarize(input).await;
        if let Err(e) = instance.destroy().await {
            tracing::warn!("summarizer destroy failed: {}", e);
        }

        Ok(TaskResult::new(summary?))
    }

    /// Prompt the generic language model.
    ///
    /// `LanguageModel` prompts go through the managed shared session; the
    /// legacy capability gets a throwaway session per call.
    pub async fn prompt(&self, input: &str, options: &PromptOptions) -> Result<TaskResult> {
        let (source, capability) = match self.selector.resolve_generator().await? {
            AiBackend::GenericPrompt { source, capability } => (source, capability),
            _ => return Err(TaskError::capability_unavailable(LANGUAGE_MODEL)),
        };

        match source {
            PromptSource::LanguageModel => {
                let availability = self.selector.resolve_availability(LANGUAGE_MODEL).await;
                if availability.is_unavailable() {
                    return Err(TaskError::PromptUnavailable);
                }

                let session = self
                    .sessions
                    .get_or_create_session(capability.as_ref())
                    .await?;
                let text = session.prompt(input, options).await?;
                Ok(TaskResult::new(text))
            }
            PromptSource::Legacy => {
                let session = capability.create().await?;
                let text = session.prompt(input, options).await;
                if let Err(e) = session.destroy().await {
                    tracing::warn!("legacy prompt session destroy failed: {}", e);
                }
                Ok(TaskResult::new(text?))
            }
        }
    }

    /// Condense raw page text into markdown key points.
    ///
    /// Blank input yields an empty summary without touching any backend.
    pub async fn summarize_page(&self, text: &str, meta: &PageMeta) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(String::new());
        }

        let windowed = window::truncate(text, self.config.windows.summary_input_chars);

        match self
            .summarize(&windowed, SummarizeOptions::key_points_markdown())
            .await
        {
            Ok(result) => Ok(result.text),
            Err(e) => {
                tracing::warn!("structured summarizer failed, falling back to prompt: {}", e);
                let input = templates::summarize_prompt(&windowed, meta);
                let options = PromptOptions::new().temperature(self.config.temperatures.summarize);
                Ok(self.prompt(&input, &options).await?.text)
            }
        }
    }

    pub async fn generate_blog(
        &self,
        summary: &str,
        category: BlogCategory,
        meta: &PageMeta,
    ) -> Result<String> {
        let windowed = window::truncate_head(
            summary,
            self.config.windows.blog_summary_chars,
            SUMMARY_TRUNCATION_MARKER,
        );
        let input = templates::blog_prompt(&windowed, category, meta);
        let options = PromptOptions::new().temperature(self.config.temperatures.blog);

        tracing::debug!(category = %category, "generating blog post");
        Ok(self.prompt(&input, &options).await?.text)
    }

    pub async fn generate_keywords(&self, summary: &str) -> Result<String> {
        let windowed = window::truncate_head(
            summary,
            self.config.windows.keywords_summary_chars,
            SHORT_TRUNCATION_MARKER,
        );
        let input = templates::keywords_prompt(&windowed);
        let options = PromptOptions::new().temperature(self.config.temperatures.keywords);

        Ok(self.prompt(&input, &options).await?.text)
    }

    pub async fn generate_social_post(&self, summary: &str, meta: &PageMeta) -> Result<String> {
        let windowed = window::truncate_head(
            summary,
            self.config.windows.social_summary_chars,
            SHORT_TRUNCATION_MARKER,
        );
        let input = templates::social_post_prompt(&windowed, meta);
        let options = PromptOptions::new().temperature(self.config.temperatures.social);

        Ok(self.prompt(&input, &options).await?.text)
    }
}
