use serde::{Deserialize, Serialize};

/// Page text beyond this many characters is dropped at extraction time
pub const MAX_PAGE_TEXT_CHARS: usize = 8000;

/// Metadata threaded into prompts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Title, if present and not blank
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Content of the active page, read once per generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub url: String,
    pub text: String,
    /// Text the user highlighted on the page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
}

impl PageContent {
    pub fn new(title: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            text: text.into(),
            selection: None,
        }
    }

    /// Build from a raw `innerText` dump: whitespace is normalized and the
    /// result capped at [`MAX_PAGE_TEXT_CHARS`].
    pub fn from_raw(title: impl Into<String>, url: impl Into<String>, raw_text: &str) -> Self {
        let text: String = Self::normalize_text(raw_text)
            .chars()
            .take(MAX_PAGE_TEXT_CHARS)
            .collect();
        Self::new(title, url, text)
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Collapse every whitespace run to a single space and trim
    pub fn normalize_text(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Text to generate from: the selection when it has content, else the page text
    pub fn source_text(&self) -> &str {
        match self.selection.as_deref() {
            Some(selection) if !selection.trim().is_empty() => selection,
            _ => &self.text,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            title: Some(self.title.clone()),
            url: Some(self.url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        let raw = "  Hello\n\n  world\t\tand\r\n more  ";
        assert_eq!(PageContent::normalize_text(raw), "Hello world and more");
        assert_eq!(PageContent::normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_from_raw_caps_length() {
        let raw = "a".repeat(MAX_PAGE_TEXT_CHARS + 500);
        let page = PageContent::from_raw("T", "https://example.com", &raw);
        assert_eq!(page.text.chars().count(), MAX_PAGE_TEXT_CHARS);
    }

    #[test]
    fn test_source_text_prefers_selection() {
        let page = PageContent::new("T", "u", "full page").with_selection("highlighted");
        assert_eq!(page.source_text(), "highlighted");

        let blank = PageContent::new("T", "u", "full page").with_selection("   ");
        assert_eq!(blank.source_text(), "full page");

        let none = PageContent::new("T", "u", "full page");
        assert_eq!(none.source_text(), "full page");
    }

    #[test]
    fn test_meta_title_ignores_blank() {
        assert_eq!(PageMeta::new().with_title("  ").title(), None);
        assert_eq!(PageMeta::new().with_title("Docs").title(), Some("Docs"));
    }
}
