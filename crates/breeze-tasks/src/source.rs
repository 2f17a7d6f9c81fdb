use anyhow::Result;
use async_trait::async_trait;
use breeze_types::PageContent;

/// Reads the page the user is looking at
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fails when there is no active page or the page forbids content access
    async fn active_page_content(&self) -> Result<PageContent>;
}

/// Content source over a page the caller already holds
#[derive(Debug, Clone)]
pub struct StaticContentSource {
    page: PageContent,
}

impl StaticContentSource {
    pub fn new(page: PageContent) -> Self {
        Self { page }
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn active_page_content(&self) -> Result<PageContent> {
        Ok(self.page.clone())
    }
}
