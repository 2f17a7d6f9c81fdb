use anyhow::Result;
use breeze_llm::{LanguageModelCapability, PromptSession};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the single live prompt session.
///
/// The session is created lazily, reused across prompts, and torn down
/// explicitly before each new generation request so conversational state
/// never leaks between unrelated pages.
#[derive(Default)]
pub struct SessionManager {
    session: Mutex<Option<Arc<dyn PromptSession>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the live session, creating it through `capability` if needed.
    ///
    /// The slot stays locked while the host creates the session, so
    /// concurrent callers share one creation.
    pub async fn get_or_create_session(
        &self,
        capability: &dyn LanguageModelCapability,
    ) -> Result<Arc<dyn PromptSession>> {
        let mut slot = self.session.lock().await;
        if let Some(session) = slot.as_ref() {
            return Ok(Arc::clone(session));
        }

        tracing::debug!("creating prompt session");
        let session = capability.create().await?;
        *slot = Some(Arc::clone(&session));
        Ok(session)
    }

    /// Destroy the live session, if any.
    ///
    /// The slot is cleared before the host is asked to destroy the session;
    /// a failing destroy is logged and otherwise ignored.
    pub async fn destroy_session(&self) {
        let session = self.session.lock().await.take();

        if let Some(session) = session {
            tracing::debug!("destroying prompt session");
            if let Err(e) = session.destroy().await {
                tracing::warn!("prompt session destroy failed: {}", e);
            }
        }
    }

    pub async fn has_session(&self) -> bool {
        self.session.lock().await.is_some()
    }
}
