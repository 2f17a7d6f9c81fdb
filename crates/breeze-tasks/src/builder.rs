use anyhow::{anyhow, Result};
use breeze_llm::HostCapabilities;
use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::pipeline::TaskPipeline;
use crate::runner::Breeze;
use crate::session::SessionManager;
use crate::source::ContentSource;

/// Builder for constructing [`Breeze`]
pub struct BreezeBuilder {
    host: Option<Arc<HostCapabilities>>,
    content_source: Option<Arc<dyn ContentSource>>,
    sessions: Option<Arc<SessionManager>>,
    config: PipelineConfig,
}

impl BreezeBuilder {
    pub fn new() -> Self {
        Self {
            host: None,
            content_source: None,
            sessions: None,
            config: PipelineConfig::default(),
        }
    }

    /// Set the host capability registry
    pub fn host(mut self, host: Arc<HostCapabilities>) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the source of page content
    pub fn content_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.content_source = Some(source);
        self
    }

    /// Share an existing session manager instead of creating one
    pub fn sessions(mut self, sessions: Arc<SessionManager>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Breeze> {
        let host = self.host
            .ok_or_else(|| anyhow!("Host capabilities are required"))?;
        let content_source = self.content_source
            .ok_or_else(|| anyhow!("Content source is required"))?;
        let sessions = self.sessions.unwrap_or_default();

        let pipeline = TaskPipeline::new(host, sessions).with_config(self.config);
        Ok(Breeze::from_parts(pipeline, content_source))
    }
}

impl Default for BreezeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
