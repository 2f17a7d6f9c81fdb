use crate::options::{PromptOptions, SummarizeOptions};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Structured summarization capability exposed by the host (`Summarizer`).
///
/// Each call to [`create`](SummarizerCapability::create) yields a fresh,
/// short-lived instance configured with the given options.
#[async_trait]
pub trait SummarizerCapability: Send + Sync {
    /// Raw host readiness status (e.g. `"available"`, `"downloadable"`)
    async fn availability(&self) -> Result<String>;

    /// Create a summarizer instance
    async fn create(&self, options: SummarizeOptions) -> Result<Box<dyn SummarizerInstance>>;
}

/// A configured summarizer created by a [`SummarizerCapability`]
#[async_trait]
pub trait SummarizerInstance: Send + Sync {
    async fn summarize(&self, input: &str) -> Result<String>;

    /// Release host resources held by this instance
    async fn destroy(&self) -> Result<()>;
}

/// Generic prompt capability exposed by the host (`LanguageModel`, or the
/// legacy `Prompt` naming).
#[async_trait]
pub trait LanguageModelCapability: Send + Sync {
    /// Raw host readiness status (e.g. `"available"`, `"downloading"`)
    async fn availability(&self) -> Result<String>;

    /// Create a new conversational session
    async fn create(&self) -> Result<Arc<dyn PromptSession>>;
}

/// Stateful conversational context held by the host AI runtime.
///
/// Prompts sent to the same session share conversational state, so callers
/// must not reuse a session across unrelated requests.
#[async_trait]
pub trait PromptSession: Send + Sync {
    async fn prompt(&self, input: &str, options: &PromptOptions) -> Result<String>;

    async fn destroy(&self) -> Result<()>;
}
