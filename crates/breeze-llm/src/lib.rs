pub mod availability;
pub mod host;
pub mod options;
pub mod traits;

pub use traits::{
    LanguageModelCapability,
    PromptSession,
    SummarizerCapability,
    SummarizerInstance,
};

pub use availability::{Availability, PendingState};
pub use host::{Capability, CapabilityKind, HostCapabilities};
pub use host::{LANGUAGE_MODEL, LEGACY_PROMPT_KEY, SUMMARIZER};
pub use options::{PromptOptions, SummarizeOptions, SummaryFormat, SummaryLength, SummaryType};
