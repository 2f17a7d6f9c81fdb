use crate::availability::Availability;
use crate::traits::{LanguageModelCapability, SummarizerCapability};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Name under which the host exposes structured summarization
pub const SUMMARIZER: &str = "Summarizer";

/// Name under which the host exposes generic prompting
pub const LANGUAGE_MODEL: &str = "LanguageModel";

/// Lookup key of the legacy prompt capability (resolved as `Prompt`)
pub const LEGACY_PROMPT_KEY: &str = "prompt";

/// Kind of capability registered under a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Summarizer,
    LanguageModel,
}

/// A capability handle as exposed by the host
#[derive(Clone)]
pub enum Capability {
    Summarizer(Arc<dyn SummarizerCapability>),
    LanguageModel(Arc<dyn LanguageModelCapability>),
}

impl Capability {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Self::Summarizer(_) => CapabilityKind::Summarizer,
            Self::LanguageModel(_) => CapabilityKind::LanguageModel,
        }
    }

    pub fn as_summarizer(&self) -> Option<Arc<dyn SummarizerCapability>> {
        match self {
            Self::Summarizer(cap) => Some(Arc::clone(cap)),
            Self::LanguageModel(_) => None,
        }
    }

    pub fn as_language_model(&self) -> Option<Arc<dyn LanguageModelCapability>> {
        match self {
            Self::LanguageModel(cap) => Some(Arc::clone(cap)),
            Self::Summarizer(_) => None,
        }
    }

    /// Query readiness. Errors from the host are reported as unavailable.
    pub async fn availability(&self) -> Availability {
        let status = match self {
            Self::Summarizer(cap) => cap.availability().await,
            Self::LanguageModel(cap) => cap.availability().await,
        };

        match status {
            Ok(status) => Availability::from_host_status(&status),
            Err(e) => {
                tracing::warn!(kind = ?self.kind(), "availability query failed: {}", e);
                Availability::Unavailable
            }
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capability").field(&self.kind()).finish()
    }
}

/// Registry of the AI capabilities the host currently exposes.
///
/// Capabilities are discovered by name at call time rather than bound
/// statically; the set may change while the extension runs.
#[derive(Default)]
pub struct HostCapabilities {
    capabilities: RwLock<HashMap<String, Capability>>,
}

impl HostCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a summarizer capability
    pub fn with_summarizer(
        mut self,
        name: impl Into<String>,
        capability: Arc<dyn SummarizerCapability>,
    ) -> Self {
        self.capabilities
            .get_mut()
            .insert(name.into(), Capability::Summarizer(capability));
        self
    }

    /// Builder-style registration of a prompt capability
    pub fn with_language_model(
        mut self,
        name: impl Into<String>,
        capability: Arc<dyn LanguageModelCapability>,
    ) -> Self {
        self.capabilities
            .get_mut()
            .insert(name.into(), Capability::LanguageModel(capability));
        self
    }

    /// Expose a capability under `name`, replacing any previous one
    pub async fn register(&self, name: impl Into<String>, capability: Capability) {
        let name = name.into();
        tracing::debug!(name = %name, kind = ?capability.kind(), "capability registered");
        self.capabilities.write().await.insert(name, capability);
    }

    /// Withdraw a capability, returning it if it was exposed
    pub async fn remove(&self, name: &str) -> Option<Capability> {
        self.capabilities.write().await.remove(name)
    }

    pub async fn get(&self, name: &str) -> Option<Capability> {
        self.capabilities.read().await.get(name).cloned()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.capabilities.read().await.contains_key(name)
    }

    /// Look up a capability by task key, capitalizing its first letter
    /// (`"prompt"` resolves to `Prompt`).
    pub async fn lookup_task(&self, key: &str) -> Option<Capability> {
        self.get(&capitalize(key)).await
    }

    /// Readiness of the named capability; absent capabilities are unavailable
    pub async fn availability(&self, name: &str) -> Availability {
        match self.get(name).await {
            Some(capability) => capability.availability().await,
            None => Availability::Unavailable,
        }
    }
}

/// Uppercase the first character of a lookup key
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
