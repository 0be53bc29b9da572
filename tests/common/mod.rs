//! Shared test utilities and stub generators.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use promptdeck::generation::{GenerationError, TextGenerator};
use promptdeck::RequestState;
use tempfile::TempDir;
use tokio::sync::{watch, Notify};

/// How a stub generator answers.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Fail,
    Panic,
}

/// Generator that records prompts and answers from a script.
///
/// When gated, each call blocks until [`StubGenerator::release`] is called,
/// which lets tests observe the Loading phase deterministically.
pub struct StubGenerator {
    replies: Mutex<Vec<StubReply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
    delay: Duration,
}

impl StubGenerator {
    fn build(replies: Vec<StubReply>, gated: bool, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: gated.then(Notify::new),
            delay,
        })
    }

    /// Answers immediately, in order.
    pub fn new(replies: Vec<StubReply>) -> Arc<Self> {
        Self::build(replies, false, Duration::ZERO)
    }

    /// Answers only after `release()`.
    pub fn gated(replies: Vec<StubReply>) -> Arc<Self> {
        Self::build(replies, true, Duration::ZERO)
    }

    /// Answers after sleeping `delay`.
    pub fn delayed(replies: Vec<StubReply>, delay: Duration) -> Arc<Self> {
        Self::build(replies, false, delay)
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reply = {
            let mut replies = self.replies.lock();
            if replies.is_empty() {
                StubReply::Fail
            } else {
                replies.remove(0)
            }
        };

        match reply {
            StubReply::Text(text) => Ok(text),
            StubReply::Fail => Err(GenerationError::ApiError {
                status: 503,
                message: "secret-internal-detail".to_string(),
            }),
            StubReply::Panic => panic!("stub generator panicked"),
        }
    }
}

/// Wait until the state leaves Loading, with a timeout.
pub async fn wait_settled(updates: &mut watch::Receiver<RequestState>) -> RequestState {
    let settled = tokio::time::timeout(
        Duration::from_secs(5),
        updates.wait_for(|state| !state.is_loading()),
    )
    .await
    .expect("request did not settle in time")
    .expect("controller dropped");
    (*settled).clone()
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
