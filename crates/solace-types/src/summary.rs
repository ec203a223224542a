use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::emotion::{EmotionalScore, EmotionalState};
use crate::tags::{Concern, CopingStrategy};

/// Maximum length of the rolling concern and strategy lists
pub const MAX_TRACKED: usize = 5;

/// Maximum number of insights kept per summary
pub const MAX_INSIGHTS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Crisis,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Crisis => "crisis",
        }
    }

    /// High and crisis both call for immediate support
    pub fn is_elevated(self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Crisis)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    #[default]
    Stable,
    Fluctuating,
}

impl MoodTrend {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodTrend::Improving => "improving",
            MoodTrend::Declining => "declining",
            MoodTrend::Stable => "stable",
            MoodTrend::Fluctuating => "fluctuating",
        }
    }
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent user turn; baseline for the next trend computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSample {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub emotional_score: EmotionalScore,
}

/// Session-scoped aggregate, replaced wholesale after every user turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub emotional_state: EmotionalState,
    pub risk_level: RiskLevel,
    pub primary_concerns: Vec<Concern>,
    pub coping_strategies_used: Vec<CopingStrategy>,
    pub mood_trend: MoodTrend,
    pub last_updated: Option<LastSample>,
    pub key_insights: Vec<String>,
}

impl ConversationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_concern(&self, concern: Concern) -> bool {
        self.primary_concerns.contains(&concern)
    }
}
