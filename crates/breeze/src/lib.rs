//! # Breeze
//!
//! Turn the page in the active browser tab into an SEO blog post, a keyword
//! list or a social post using the AI capabilities built into the browser.
//!
//! ## Overview
//!
//! The host exposes two kinds of capability, discovered by name at runtime:
//!
//! - **`Summarizer`**: structured summarization
//! - **`LanguageModel`**: generic prompting through a conversational session
//!   (older hosts expose it as `Prompt`)
//!
//! Breeze picks a backend per call, keeps one prompt session alive between
//! the two stages of a request, windows oversized inputs to fit small
//! context windows, and runs the summarize → generate pipeline.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use breeze::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run(summarizer: Arc<dyn SummarizerCapability>, model: Arc<dyn LanguageModelCapability>) -> anyhow::Result<()> {
//! let host = HostCapabilities::new()
//!     .with_summarizer(SUMMARIZER, summarizer)
//!     .with_language_model(LANGUAGE_MODEL, model);
//!
//! let page = PageContent::from_raw("Release notes", "https://example.com", "  Body text ...  ");
//!
//! let breeze = Breeze::builder()
//!     .host(Arc::new(host))
//!     .content_source(Arc::new(StaticContentSource::new(page)))
//!     .build()?;
//!
//! let artifact = breeze
//!     .generate(GenerationRequest::blog(BlogCategory::BestPractices))
//!     .await?;
//! println!("{}", artifact.text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`breeze-llm`**: host capability traits, options and the capability registry
//! - **`breeze-types`**: page content, categories and artifacts
//! - **`breeze-tasks`**: windowing, backend selection, session management and pipelines
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use breeze_llm::{
    Availability, Capability, CapabilityKind, HostCapabilities, PendingState,
    LanguageModelCapability, PromptSession, SummarizerCapability, SummarizerInstance,
    PromptOptions, SummarizeOptions, SummaryFormat, SummaryLength, SummaryType,
    LANGUAGE_MODEL, LEGACY_PROMPT_KEY, SUMMARIZER,
};

pub use breeze_types::{
    Artifact, BlogCategory, GenerationMode, PageContent, PageMeta, TaskResult, UnknownCategory,
};

pub use breeze_tasks::{
    AiBackend, BackendSelector, Breeze, BreezeBuilder, ContentSource, GenerationRequest,
    PipelineConfig, Probe, PromptSource, SessionManager, StaticContentSource, TaskError,
    TaskPipeline, TemperatureConfig, WindowConfig,
    truncate, truncate_head, TRUNCATION_MARKER,
};

pub use async_trait::async_trait;
