// Configuration layer for provider-agnostic generator creation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::traits::TextGenerator;

pub const DEFAULT_HUGGINGFACE_MODEL: &str = "microsoft/DialoGPT-medium";

/// Type of text generation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    HuggingFace,
    OpenAI,
}

/// Configuration for the Hugging Face Inference API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    #[serde(default = "default_huggingface_model")]
    pub model: String,
    /// Base URL (optional, defaults to https://api-inference.huggingface.co)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_huggingface_model() -> String {
    DEFAULT_HUGGINGFACE_MODEL.to_string()
}

impl HuggingFaceConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Configuration for OpenAI provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderDetails {
    HuggingFace(HuggingFaceConfig),
    OpenAI(OpenAIConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    pub fn huggingface(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::HuggingFace(HuggingFaceConfig::new(api_key, model)),
        }
    }

    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::OpenAI(OpenAIConfig::new(api_key, model)),
        }
    }

    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::HuggingFace(_) => ProviderType::HuggingFace,
            ProviderDetails::OpenAI(_) => ProviderType::OpenAI,
        }
    }
}

/// Factory for creating generators from configuration
pub struct ClientFactory;

impl ClientFactory {
    pub fn create_generator(config: ProviderConfig) -> Result<Arc<dyn TextGenerator>> {
        match config.details {
            ProviderDetails::HuggingFace(hf) => {
                let mut client = crate::huggingface::HuggingFaceClient::new(hf.api_key, hf.model)?;
                if let Some(base_url) = hf.base_url {
                    client = client.with_base_url(base_url);
                }
                Ok(Arc::new(client))
            }
            ProviderDetails::OpenAI(openai) => {
                let mut client = crate::openai::OpenAIClient::new(openai.api_key, openai.model)?;
                if let Some(base_url) = openai.base_url {
                    client = client.with_base_url(base_url);
                }
                Ok(Arc::new(client))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huggingface_config() {
        let config = ProviderConfig::huggingface("hf_test", DEFAULT_HUGGINGFACE_MODEL);
        assert_eq!(config.provider_type(), ProviderType::HuggingFace);
    }

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("sk-test", "gpt-4o-mini");
        assert_eq!(config.provider_type(), ProviderType::OpenAI);
    }

    #[test]
    fn test_tagged_deserialization_defaults_model() {
        let json = r#"{"type": "huggingface", "api_key": "hf_test"}"#;
        let config: ProviderConfig = serde_json::from_str(json).unwrap();

        match config.details {
            ProviderDetails::HuggingFace(hf) => assert_eq!(hf.model, DEFAULT_HUGGINGFACE_MODEL),
            other => panic!("unexpected provider: {:?}", other),
        }
    }

    #[test]
    fn test_factory_builds_named_generator() {
        let generator = ClientFactory::create_generator(ProviderConfig::openai("sk-test", "gpt-4o-mini"))
            .unwrap();
        assert_eq!(generator.provider_name(), "openai");
    }
}
