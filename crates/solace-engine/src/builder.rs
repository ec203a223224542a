use solace_llm::TextGenerator;
use std::sync::Arc;

use crate::config::ResponderConfig;
use crate::crisis::{CrisisNotifier, LoggingNotifier};
use crate::random::{RandomSource, ThreadRandom};
use crate::responder::Responder;

/// Builder for a [`Responder`]; every component is optional
pub struct ResponderBuilder {
    generator: Option<Arc<dyn TextGenerator>>,
    notifier: Option<Arc<dyn CrisisNotifier>>,
    random: Option<Arc<dyn RandomSource>>,
    config: ResponderConfig,
}

impl ResponderBuilder {
    pub fn new() -> Self {
        Self {
            generator: None,
            notifier: None,
            random: None,
            config: ResponderConfig::default(),
        }
    }

    /// Remote generator; without one every reply comes from the fallback bank
    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn CrisisNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    pub fn config(mut self, config: ResponderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Responder {
        Responder::new(
            self.generator,
            self.notifier.unwrap_or_else(|| Arc::new(LoggingNotifier)),
            self.random.unwrap_or_else(|| Arc::new(ThreadRandom)),
            self.config,
        )
    }
}

impl Default for ResponderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
