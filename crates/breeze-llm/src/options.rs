use serde::{Deserialize, Serialize};

/// Shape of the summary the host summarizer should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryType {
    #[default]
    KeyPoints,
    Tldr,
    Teaser,
    Headline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    #[default]
    Markdown,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// Options passed to `Summarizer.create`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeOptions {
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    pub format: SummaryFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<SummaryLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_context: Option<String>,
}

impl SummarizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markdown key points, the shape used for page summaries
    pub fn key_points_markdown() -> Self {
        Self::new()
            .summary_type(SummaryType::KeyPoints)
            .format(SummaryFormat::Markdown)
    }

    pub fn summary_type(mut self, summary_type: SummaryType) -> Self {
        self.summary_type = summary_type;
        self
    }

    pub fn format(mut self, format: SummaryFormat) -> Self {
        self.format = format;
        self
    }

    pub fn length(mut self, length: SummaryLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn shared_context(mut self, context: impl Into<String>) -> Self {
        self.shared_context = Some(context.into());
        self
    }

    /// Options object in the shape the host API expects
    pub fn to_host_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Options passed to `session.prompt`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl PromptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn to_host_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
