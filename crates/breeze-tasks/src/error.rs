use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// No host capability can serve the operation
    #[error("{capability} API not available. Please ensure the browser's built-in AI features are enabled.")]
    CapabilityUnavailable { capability: String },

    /// `LanguageModel` is exposed but reports it cannot run on this device
    #[error("Prompt API is unavailable on this device/browser")]
    PromptUnavailable,

    #[error("Please select a blog category")]
    MissingCategory,

    #[error(transparent)]
    InvalidCategory(#[from] breeze_types::UnknownCategory),

    /// Failure raised by the host runtime, passed through unmodified
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl TaskError {
    pub fn capability_unavailable(capability: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability: capability.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
