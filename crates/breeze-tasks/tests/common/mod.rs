#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use breeze_llm::{
    LanguageModelCapability, PromptOptions, PromptSession, SummarizeOptions,
    SummarizerCapability, SummarizerInstance,
};
use breeze_tasks::{ContentSource, SessionManager};
use breeze_types::PageContent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
pub struct RecordedPrompt {
    pub session_id: usize,
    pub input: String,
    pub temperature: Option<f32>,
}

#[derive(Default)]
struct ModelLog {
    creations: AtomicUsize,
    destroys: AtomicUsize,
    prompts: Mutex<Vec<RecordedPrompt>>,
}

/// Prompt capability double counting every host call
pub struct FakeLanguageModel {
    status: Option<String>,
    reply: String,
    fail_prompt: bool,
    fail_destroy: bool,
    log: Arc<ModelLog>,
}

impl FakeLanguageModel {
    pub fn new() -> Self {
        Self {
            status: Some("available".to_string()),
            reply: "generated text".to_string(),
            fail_prompt: false,
            fail_destroy: false,
            log: Arc::new(ModelLog::default()),
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// `availability()` itself throws
    pub fn with_failing_status(mut self) -> Self {
        self.status = None;
        self
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    pub fn failing_prompt(mut self) -> Self {
        self.fail_prompt = true;
        self
    }

    pub fn failing_destroy(mut self) -> Self {
        self.fail_destroy = true;
        self
    }

    pub fn creations(&self) -> usize {
        self.log.creations.load(Ordering::SeqCst)
    }

    pub fn destroys(&self) -> usize {
        self.log.destroys.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<RecordedPrompt> {
        self.log.prompts.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.log.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> RecordedPrompt {
        self.prompts().last().cloned().expect("no prompt recorded")
    }
}

#[async_trait]
impl LanguageModelCapability for FakeLanguageModel {
    async fn availability(&self) -> Result<String> {
        self.status
            .clone()
            .ok_or_else(|| anyhow!("availability() is not supported"))
    }

    async fn create(&self) -> Result<Arc<dyn PromptSession>> {
        let id = self.log.creations.fetch_add(1, Ordering::SeqCst) + 1;
        // Let concurrent callers interleave at the creation boundary
        tokio::task::yield_now().await;
        Ok(Arc::new(FakeSession {
            id,
            reply: self.reply.clone(),
            fail_prompt: self.fail_prompt,
            fail_destroy: self.fail_destroy,
            log: Arc::clone(&self.log),
        }))
    }
}

pub struct FakeSession {
    pub id: usize,
    reply: String,
    fail_prompt: bool,
    fail_destroy: bool,
    log: Arc<ModelLog>,
}

#[async_trait]
impl PromptSession for FakeSession {
    async fn prompt(&self, input: &str, options: &PromptOptions) -> Result<String> {
        self.log.prompts.lock().unwrap().push(RecordedPrompt {
            session_id: self.id,
            input: input.to_string(),
            temperature: options.temperature,
        });
        if self.fail_prompt {
            return Err(anyhow!("The model execution session has been destroyed."));
        }
        Ok(self.reply.clone())
    }

    async fn destroy(&self) -> Result<()> {
        self.log.destroys.fetch_add(1, Ordering::SeqCst);
        if self.fail_destroy {
            return Err(anyhow!("destroy() failed"));
        }
        Ok(())
    }
}

#[derive(Default)]
struct SummarizerLog {
    creations: AtomicUsize,
    destroys: AtomicUsize,
    inputs: Mutex<Vec<String>>,
    options: Mutex<Vec<SummarizeOptions>>,
}

/// Structured summarizer double
pub struct FakeSummarizer {
    reply: String,
    fail: bool,
    log: Arc<SummarizerLog>,
}

impl FakeSummarizer {
    pub fn new() -> Self {
        Self {
            reply: "- summarized point".to_string(),
            fail: false,
            log: Arc::new(SummarizerLog::default()),
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn creations(&self) -> usize {
        self.log.creations.load(Ordering::SeqCst)
    }

    pub fn destroys(&self) -> usize {
        self.log.destroys.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.log.inputs.lock().unwrap().clone()
    }

    pub fn options(&self) -> Vec<SummarizeOptions> {
        self.log.options.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizerCapability for FakeSummarizer {
    async fn availability(&self) -> Result<String> {
        Ok("available".to_string())
    }

    async fn create(&self, options: SummarizeOptions) -> Result<Box<dyn SummarizerInstance>> {
        self.log.creations.fetch_add(1, Ordering::SeqCst);
        self.log.options.lock().unwrap().push(options);
        Ok(Box::new(FakeSummarizerInstance {
            reply: self.reply.clone(),
            fail: self.fail,
            log: Arc::clone(&self.log),
        }))
    }
}

struct FakeSummarizerInstance {
    reply: String,
    fail: bool,
    log: Arc<SummarizerLog>,
}

#[async_trait]
impl SummarizerInstance for FakeSummarizerInstance {
    async fn summarize(&self, input: &str) -> Result<String> {
        self.log.inputs.lock().unwrap().push(input.to_string());
        if self.fail {
            return Err(anyhow!("NotSupportedError: summarizer model not ready"));
        }
        Ok(self.reply.clone())
    }

    async fn destroy(&self) -> Result<()> {
        self.log.destroys.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Content source double that records whether a prompt session was still
/// alive when the page was read
pub struct FakeContentSource {
    page: Option<PageContent>,
    sessions: Option<Arc<SessionManager>>,
    calls: AtomicUsize,
    session_alive_at_read: Mutex<Vec<bool>>,
}

impl FakeContentSource {
    pub fn new(page: PageContent) -> Self {
        Self {
            page: Some(page),
            sessions: None,
            calls: AtomicUsize::new(0),
            session_alive_at_read: Mutex::new(Vec::new()),
        }
    }

    /// Extraction fails, as on pages without a content script
    pub fn failing() -> Self {
        Self {
            page: None,
            sessions: None,
            calls: AtomicUsize::new(0),
            session_alive_at_read: Mutex::new(Vec::new()),
        }
    }

    pub fn watching(mut self, sessions: Arc<SessionManager>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn session_alive_at_read(&self) -> Vec<bool> {
        self.session_alive_at_read.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for FakeContentSource {
    async fn active_page_content(&self) -> Result<PageContent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(sessions) = &self.sessions {
            let alive = sessions.has_session().await;
            self.session_alive_at_read.lock().unwrap().push(alive);
        }
        self.page
            .clone()
            .ok_or_else(|| anyhow!("Could not establish connection. Receiving end does not exist."))
    }
}
