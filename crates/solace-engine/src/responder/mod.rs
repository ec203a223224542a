// Reply selection: remote generation first, local bank as fallback

pub mod fallback;
pub mod prompt;

use serde::{Deserialize, Serialize};
use solace_llm::{GenerationOptions, GenerationRequest, TextGenerator};
use solace_types::HistoryEntry;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::builder::ResponderBuilder;
use crate::config::ResponderConfig;
use crate::crisis::{contains_crisis_phrase, CrisisAlert, CrisisNotifier};
use crate::random::RandomSource;

pub use fallback::{classify_message, fallback_reply, FallbackCategory, FallbackReply};
pub use prompt::{build_prompt, clean_generated};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Fallback,
}

/// Assistant reply for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
    /// Bank category when the reply came from the fallback bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FallbackCategory>,
    /// Set when crisis resources were surfaced during this turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_alert: Option<CrisisAlert>,
}

pub struct Responder {
    generator: Option<Arc<dyn TextGenerator>>,
    notifier: Arc<dyn CrisisNotifier>,
    random: Arc<dyn RandomSource>,
    config: ResponderConfig,
}

impl Responder {
    pub(crate) fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        notifier: Arc<dyn CrisisNotifier>,
        random: Arc<dyn RandomSource>,
        config: ResponderConfig,
    ) -> Self {
        Self {
            generator,
            notifier,
            random,
            config,
        }
    }

    pub fn builder() -> ResponderBuilder {
        ResponderBuilder::new()
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Select the reply for `user_message`; `history` holds earlier turns only.
    ///
    /// Never fails: every remote problem degrades to the fallback bank.
    pub async fn respond(&self, user_message: &str, history: &[HistoryEntry]) -> Reply {
        let mut crisis_alert = None;
        if contains_crisis_phrase(user_message) {
            crisis_alert = Some(self.surface_crisis_resources());
        }

        if let Some(text) = self.generate_remote(user_message, history).await {
            return Reply {
                text,
                source: ReplySource::Remote,
                category: None,
                crisis_alert,
            };
        }

        let FallbackReply { category, text } = fallback_reply(user_message, self.random.as_ref());
        if category.surfaces_crisis_resources() && crisis_alert.is_none() {
            crisis_alert = Some(self.surface_crisis_resources());
        }
        debug!(category = %category, "Using fallback reply");

        Reply {
            text,
            source: ReplySource::Fallback,
            category: Some(category),
            crisis_alert,
        }
    }

    async fn generate_remote(&self, user_message: &str, history: &[HistoryEntry]) -> Option<String> {
        let generator = self.generator.as_ref()?;

        let options = GenerationOptions::new()
            .max_length(self.config.max_length)
            .temperature(self.config.temperature)
            .do_sample(self.config.do_sample);
        let request = GenerationRequest::new(build_prompt(user_message, history)).with_options(options);

        let response = match tokio::time::timeout(self.config.timeout, generator.generate(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(provider = generator.provider_name(), error = %e, "Remote generation failed");
                return None;
            }
            Err(_) => {
                warn!(
                    provider = generator.provider_name(),
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "Remote generation timed out"
                );
                return None;
            }
        };

        let cleaned = clean_generated(response.text.as_deref().unwrap_or_default());
        if prompt::is_acceptable(&cleaned) {
            Some(cleaned)
        } else {
            debug!(provider = generator.provider_name(), "Generated text too short, discarding");
            None
        }
    }

    fn surface_crisis_resources(&self) -> CrisisAlert {
        let alert = CrisisAlert::new(self.random.as_ref());
        self.notifier.surface(&alert);
        alert
    }
}
