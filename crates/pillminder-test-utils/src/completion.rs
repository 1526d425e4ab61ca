//! Scripted completion providers.

use async_trait::async_trait;
use parking_lot::Mutex;
use pillminder_ai::{CompletionProvider, UpstreamError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct FixedCompletion {
    text: String,
}

impl FixedCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// A provider whose replies carry no text.
    pub fn empty() -> Self {
        Self::new("")
    }
}

#[async_trait]
impl CompletionProvider for FixedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, UpstreamError> {
        Ok(self.text.clone())
    }
}

/// Always fails with a transport error.
#[derive(Debug, Clone)]
pub struct FailingCompletion {
    message: String,
}

impl FailingCompletion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, UpstreamError> {
        Err(UpstreamError::Transport(self.message.clone()))
    }
}

/// Answers with a fixed text and records every prompt it receives.
#[derive(Debug, Clone)]
pub struct RecordingCompletion {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingCompletion {
    pub fn new(response: impl Into<String>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                response: response.into(),
                prompts: prompts.clone(),
            },
            prompts,
        )
    }
}

#[async_trait]
impl CompletionProvider for RecordingCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Holds every call until the test releases a permit.
///
/// Used to keep several calls in flight at once.
#[derive(Debug, Clone)]
pub struct GatedCompletion {
    response: String,
    gate: Arc<Semaphore>,
    started: Arc<AtomicUsize>,
}

impl GatedCompletion {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            gate: Arc::new(Semaphore::new(0)),
            started: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Let `count` waiting calls finish.
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    /// Calls that have reached the provider so far.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for GatedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, UpstreamError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        permit.forget();
        Ok(self.response.clone())
    }
}
