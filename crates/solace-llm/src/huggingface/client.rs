// Hugging Face Inference API client

use crate::traits::{GenerationRequest, GenerationResponse, TextGenerator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const HUGGINGFACE_API_BASE: &str = "https://api-inference.huggingface.co";

/// Hugging Face text-generation client (HTTP direct, no SDK)
pub struct HuggingFaceClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl HuggingFaceClient {
    /// Create new client for a hosted model, e.g. `microsoft/DialoGPT-medium`
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: HUGGINGFACE_API_BASE.to_string(),
            model: model.into(),
        })
    }

    /// Point the client at another host (self-hosted inference, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_payload(&self, request: &GenerationRequest) -> Value {
        let options = &request.options;
        let mut parameters = serde_json::Map::new();
        if let Some(max_length) = options.max_length {
            parameters.insert("max_length".to_string(), serde_json::json!(max_length));
        }
        if let Some(temperature) = options.temperature {
            parameters.insert("temperature".to_string(), serde_json::json!(temperature));
        }
        if let Some(do_sample) = options.do_sample {
            parameters.insert("do_sample".to_string(), serde_json::json!(do_sample));
        }
        parameters.insert("return_full_text".to_string(), serde_json::json!(false));

        serde_json::json!({
            "inputs": request.prompt,
            "parameters": parameters,
            "options": { "wait_for_model": false },
        })
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let payload = self.build_payload(&request);
        tracing::debug!(model = %self.model, prompt_chars = request.prompt.len(), "Requesting generation");

        let response = self
            .http_client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Hugging Face API error ({}): {}", status, error_text);
        }

        let raw: Vec<GeneratedText> = response
            .json()
            .await
            .context("Failed to parse response")?;
        tracing::debug!(model = %self.model, candidates = raw.len(), "Generation received");

        Ok(GenerationResponse {
            text: raw.first().and_then(|g| g.generated_text.clone()),
            raw: serde_json::to_value(raw)?,
        })
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GenerationOptions;

    #[test]
    fn test_payload_carries_parameters() {
        let client = HuggingFaceClient::new("test-key", "microsoft/DialoGPT-medium").unwrap();
        let request = GenerationRequest::new("User: hi\nAssistant:").with_options(
            GenerationOptions::new()
                .max_length(200)
                .temperature(0.8)
                .do_sample(true),
        );

        let payload = client.build_payload(&request);
        assert_eq!(payload["inputs"], "User: hi\nAssistant:");
        assert_eq!(payload["parameters"]["max_length"], 200);
        assert_eq!(payload["parameters"]["do_sample"], true);
        assert_eq!(payload["parameters"]["return_full_text"], false);
        assert_eq!(payload["options"]["wait_for_model"], false);
    }

    #[test]
    fn test_payload_omits_unset_options() {
        let client = HuggingFaceClient::new("test-key", "gpt2").unwrap();
        let payload = client.build_payload(&GenerationRequest::new("hello"));

        let parameters = payload["parameters"].as_object().unwrap();
        assert!(!parameters.contains_key("temperature"));
        assert!(!parameters.contains_key("max_length"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HuggingFaceClient::new("k", "gpt2")
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
