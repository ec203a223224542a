#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use solace_engine::{CrisisAlert, CrisisNotifier};
use solace_llm::{GenerationRequest, GenerationResponse, TextGenerator};
use std::sync::Mutex;
use std::time::Duration;

/// Generator returning a fixed text, optionally after a delay
pub struct StubGenerator {
    pub text: Option<String>,
    pub delay: Option<Duration>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            delay: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn slow(text: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying(text)
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.prompts.lock().unwrap().push(request.prompt);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(GenerationResponse {
            text: self.text.clone(),
            raw: serde_json::Value::Null,
        })
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

/// Generator whose transport always fails
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse> {
        anyhow::bail!("connection refused")
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Notifier that remembers every alert it was given
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<CrisisAlert>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }
}

impl CrisisNotifier for RecordingNotifier {
    fn surface(&self, alert: &CrisisAlert) {
        self.alerts.lock().unwrap().push(alert.clone());
    }
}
