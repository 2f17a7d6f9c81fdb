use crate::category::{BlogCategory, GenerationMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Textual output of a single AI invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub text: String,
}

impl TaskResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<String> for TaskResult {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Generated output handed back to the side panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub mode: GenerationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BlogCategory>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    pub fn new(mode: GenerationMode, category: Option<BlogCategory>, text: impl Into<String>) -> Self {
        Self {
            mode,
            category,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Download name: `<category label or "blog">-<unix millis>-breeze.md`
    pub fn suggested_file_name(&self) -> String {
        let prefix = self.category.map(|c| c.label()).unwrap_or("blog");
        format!("{}-{}-breeze.md", prefix, self.created_at.timestamp_millis())
    }
}
