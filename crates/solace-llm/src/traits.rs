use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for prompt-in, text-out generation backends
///
/// Implementations are treated as untrusted: callers must be prepared for
/// errors, empty output and slow responses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Single non-streaming generation
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Short provider name used in logs
    fn provider_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_length: Option<u32>,
    pub temperature: Option<f32>,
    pub do_sample: Option<bool>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn do_sample(mut self, sample: bool) -> Self {
        self.do_sample = Some(sample);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// First generated text, if the provider returned one
    pub text: Option<String>,
    pub raw: serde_json::Value,
}
