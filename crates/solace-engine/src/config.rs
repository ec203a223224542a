use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote generation parameters for the responder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderConfig {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub timeout: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.8,
            do_sample: true,
            timeout: Duration::from_secs(15),
        }
    }
}

impl ResponderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_sampling(mut self, enabled: bool) -> Self {
        self.do_sample = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
