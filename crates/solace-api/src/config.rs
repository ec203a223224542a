use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use solace_engine::ResponderConfig;
use solace_llm::{
    config::{HuggingFaceConfig, OpenAIConfig, ProviderDetails},
    ProviderConfig,
};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub persist: PersistConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub hf_token: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub mongodb_uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Live sessions untouched for this long are dropped and resumed from storage
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,
}

fn default_request_timeout() -> u64 {
    60
}

fn default_session_idle() -> u64 {
    1800
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    HuggingFace,
    OpenAI,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub timeout_secs: u64,
}

impl From<&LlmConfig> for ResponderConfig {
    fn from(config: &LlmConfig) -> Self {
        ResponderConfig::new()
            .with_max_length(config.max_length)
            .with_temperature(config.temperature)
            .with_sampling(config.do_sample)
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    MongoDb,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersistConfig {
    pub backend: StorageBackend,
    pub database: String,
    /// JSON mirror used as offline fallback when set
    #[serde(default)]
    pub cache_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables such as SOLACE_SERVER__PORT
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SOLACE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        // Secrets are optional: without a key the responder runs on fallback replies
        cfg.hf_token = std::env::var("HF_TOKEN").ok().filter(|v| !v.is_empty());
        cfg.openai_api_key = std::env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty());
        cfg.mongodb_uri = std::env::var("MONGODB_URI").ok().filter(|v| !v.is_empty());

        if cfg.persist.backend == StorageBackend::MongoDb && cfg.mongodb_uri.is_none() {
            return Err(ConfigError::Message(
                "MONGODB_URI environment variable is required for the mongodb backend".to_string(),
            ));
        }

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));
        builder.build()?.try_deserialize()
    }

    /// Generator settings, or `None` when remote generation is off or has no key
    pub fn provider_config(&self) -> Option<ProviderConfig> {
        let details = match self.llm.provider {
            LlmProvider::None => return None,
            LlmProvider::HuggingFace => ProviderDetails::HuggingFace(HuggingFaceConfig {
                api_key: self.hf_token.clone()?,
                model: self.llm.model.clone(),
                base_url: self.llm.base_url.clone(),
            }),
            LlmProvider::OpenAI => ProviderDetails::OpenAI(OpenAIConfig {
                api_key: self.openai_api_key.clone()?,
                model: self.llm.model.clone(),
                base_url: self.llm.base_url.clone(),
            }),
        };
        Some(ProviderConfig { details })
    }

    pub fn responder_config(&self) -> ResponderConfig {
        ResponderConfig::from(&self.llm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 3000

        [cors]
        enabled = true
        origins = ["http://localhost:3000"]

        [llm]
        provider = "huggingface"
        model = "microsoft/DialoGPT-medium"
        max_length = 200
        temperature = 0.8
        do_sample = true
        timeout_secs = 10

        [persist]
        backend = "memory"
        database = "test"

        [logging]
        level = "debug"
        format = "json"
    "#;

    #[test]
    fn test_config_structure() {
        let config: Config = toml::from_str(TOML).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_secs, 60);
        assert_eq!(config.server.session_idle_secs, 1800);
        assert_eq!(config.llm.provider, LlmProvider::HuggingFace);
        assert_eq!(config.persist.backend, StorageBackend::Memory);
        assert!(config.persist.cache_path.is_none());
    }

    #[test]
    fn test_responder_config_from_llm_section() {
        let config: Config = toml::from_str(TOML).unwrap();
        let responder = config.responder_config();
        assert_eq!(responder.max_length, 200);
        assert!(responder.do_sample);
        assert_eq!(responder.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_provider_requires_secret() {
        let mut config: Config = toml::from_str(TOML).unwrap();
        assert!(config.provider_config().is_none());

        config.hf_token = Some("hf_test".to_string());
        let provider = config.provider_config().unwrap();
        assert_eq!(provider.provider_type(), solace_llm::ProviderType::HuggingFace);
    }

    #[test]
    fn test_provider_none_disables_generation() {
        let mut config: Config = toml::from_str(TOML).unwrap();
        config.llm.provider = LlmProvider::None;
        config.hf_token = Some("hf_test".to_string());
        assert!(config.provider_config().is_none());
    }
}
