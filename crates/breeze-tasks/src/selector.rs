use crate::error::{Result, TaskError};
use breeze_llm::{
    Availability, Capability, HostCapabilities, LanguageModelCapability, SummarizerCapability,
    LANGUAGE_MODEL, LEGACY_PROMPT_KEY, SUMMARIZER,
};
use std::fmt;
use std::sync::Arc;

/// Where a generic prompt backend was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    /// The current `LanguageModel` capability; sessions are shared
    LanguageModel,
    /// The legacy capability found by capitalized task key
    Legacy,
}

/// The backend chosen for an operation
#[derive(Clone)]
pub enum AiBackend {
    StructuredSummarizer(Arc<dyn SummarizerCapability>),
    GenericPrompt {
        source: PromptSource,
        capability: Arc<dyn LanguageModelCapability>,
    },
    Unavailable,
}

impl AiBackend {
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

impl fmt::Debug for AiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuredSummarizer(_) => f.write_str("StructuredSummarizer"),
            Self::GenericPrompt { source, .. } => {
                f.debug_struct("GenericPrompt").field("source", source).finish()
            }
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// One step of a probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Capability exposed under an exact name
    Named(&'static str),
    /// Capability found through a capitalized task key (legacy naming)
    Task(&'static str),
}

/// Structured summarizer first, then generic prompting
pub const SUMMARIZER_PROBES: [Probe; 3] = [
    Probe::Named(SUMMARIZER),
    Probe::Named(LANGUAGE_MODEL),
    Probe::Task(LEGACY_PROMPT_KEY),
];

/// Generic prompting, then the legacy prompt capability
pub const GENERATOR_PROBES: [Probe; 2] = [
    Probe::Named(LANGUAGE_MODEL),
    Probe::Task(LEGACY_PROMPT_KEY),
];

/// Decides which host capability serves an operation.
///
/// Nothing is cached: every call probes the host again.
#[derive(Clone)]
pub struct BackendSelector {
    host: Arc<HostCapabilities>,
}

impl BackendSelector {
    pub fn new(host: Arc<HostCapabilities>) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &Arc<HostCapabilities> {
        &self.host
    }

    /// Return the backend of the first probe the host satisfies
    pub async fn probe(&self, order: &[Probe]) -> AiBackend {
        for probe in order {
            let (found, source) = match probe {
                Probe::Named(name) => (self.host.get(name).await, PromptSource::LanguageModel),
                Probe::Task(key) => (self.host.lookup_task(key).await, PromptSource::Legacy),
            };

            let backend = match found {
                Some(Capability::Summarizer(capability)) => {
                    AiBackend::StructuredSummarizer(capability)
                }
                Some(Capability::LanguageModel(capability)) => {
                    AiBackend::GenericPrompt { source, capability }
                }
                None => continue,
            };

            tracing::debug!(?probe, ?backend, "backend selected");
            return backend;
        }

        tracing::debug!(?order, "no backend satisfied probe order");
        AiBackend::Unavailable
    }

    pub async fn resolve_summarizer(&self) -> Result<AiBackend> {
        match self.probe(&SUMMARIZER_PROBES).await {
            AiBackend::Unavailable => Err(TaskError::capability_unavailable(SUMMARIZER)),
            backend => Ok(backend),
        }
    }

    pub async fn resolve_generator(&self) -> Result<AiBackend> {
        match self.probe(&GENERATOR_PROBES).await {
            AiBackend::Unavailable => Err(TaskError::capability_unavailable(LANGUAGE_MODEL)),
            backend => Ok(backend),
        }
    }

    /// Readiness of a named capability. Never fails.
    pub async fn resolve_availability(&self, capability: &str) -> Availability {
        self.host.availability(capability).await
    }
}
