//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use breeze::prelude::*;
//! ```

pub use crate::{
    Breeze, BreezeBuilder, GenerationRequest, TaskPipeline, SessionManager, PipelineConfig,
    ContentSource, StaticContentSource, TaskError,
    HostCapabilities, Availability, LanguageModelCapability, PromptSession,
    SummarizerCapability, SummarizerInstance, PromptOptions, SummarizeOptions,
    LANGUAGE_MODEL, SUMMARIZER,
    Artifact, BlogCategory, GenerationMode, PageContent, PageMeta,
    async_trait,
};
