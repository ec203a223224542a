use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic detected in user text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    Anxiety,
    Depression,
    Anger,
    Loneliness,
    Stress,
    Sleep,
    Relationships,
    Work,
    School,
}

impl Concern {
    pub fn as_str(self) -> &'static str {
        match self {
            Concern::Anxiety => "anxiety",
            Concern::Depression => "depression",
            Concern::Anger => "anger",
            Concern::Loneliness => "loneliness",
            Concern::Stress => "stress",
            Concern::Sleep => "sleep",
            Concern::Relationships => "relationships",
            Concern::Work => "work",
            Concern::School => "school",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coping strategy mentioned in assistant text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopingStrategy {
    Breathing,
    Grounding,
    Mindfulness,
    Relaxation,
    SelfCare,
}

impl CopingStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            CopingStrategy::Breathing => "breathing",
            CopingStrategy::Grounding => "grounding",
            CopingStrategy::Mindfulness => "mindfulness",
            CopingStrategy::Relaxation => "relaxation",
            CopingStrategy::SelfCare => "selfcare",
        }
    }
}

impl fmt::Display for CopingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
