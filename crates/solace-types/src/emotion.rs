use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion categories scored for every user message, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Depression,
    Anger,
    Loneliness,
    Stress,
    Crisis,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Anxiety,
        Emotion::Depression,
        Emotion::Anger,
        Emotion::Loneliness,
        Emotion::Stress,
        Emotion::Crisis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Depression => "depression",
            Emotion::Anger => "anger",
            Emotion::Loneliness => "loneliness",
            Emotion::Stress => "stress",
            Emotion::Crisis => "crisis",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category intensity for a single message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalScore {
    pub anxiety: u32,
    pub depression: u32,
    pub anger: u32,
    pub loneliness: u32,
    pub stress: u32,
    pub crisis: u32,
}

impl EmotionalScore {
    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Anxiety => self.anxiety,
            Emotion::Depression => self.depression,
            Emotion::Anger => self.anger,
            Emotion::Loneliness => self.loneliness,
            Emotion::Stress => self.stress,
            Emotion::Crisis => self.crisis,
        }
    }

    pub fn add(&mut self, emotion: Emotion, weight: u32) {
        let slot = match emotion {
            Emotion::Anxiety => &mut self.anxiety,
            Emotion::Depression => &mut self.depression,
            Emotion::Anger => &mut self.anger,
            Emotion::Loneliness => &mut self.loneliness,
            Emotion::Stress => &mut self.stress,
            Emotion::Crisis => &mut self.crisis,
        };
        *slot += weight;
    }

    /// Sum over all categories
    pub fn total(&self) -> u32 {
        Emotion::ALL.iter().map(|e| self.get(*e)).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Highest-scoring category; ties go to the earliest in [`Emotion::ALL`].
    /// `None` when nothing scored.
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, u32)> = None;
        for emotion in Emotion::ALL {
            let value = self.get(emotion);
            if value == 0 {
                continue;
            }
            match best {
                Some((_, current)) if current >= value => {}
                _ => best = Some((emotion, value)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }
}

/// Summary-level label: a dominant emotion, or neutral when nothing scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    #[default]
    Neutral,
    Anxiety,
    Depression,
    Anger,
    Loneliness,
    Stress,
    Crisis,
}

impl EmotionalState {
    pub fn label(self) -> &'static str {
        match self {
            EmotionalState::Neutral => "Neutral",
            EmotionalState::Anxiety => "Anxiety",
            EmotionalState::Depression => "Depression",
            EmotionalState::Anger => "Anger",
            EmotionalState::Loneliness => "Loneliness",
            EmotionalState::Stress => "Stress",
            EmotionalState::Crisis => "Crisis",
        }
    }
}

impl From<Emotion> for EmotionalState {
    fn from(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Anxiety => EmotionalState::Anxiety,
            Emotion::Depression => EmotionalState::Depression,
            Emotion::Anger => EmotionalState::Anger,
            Emotion::Loneliness => EmotionalState::Loneliness,
            Emotion::Stress => EmotionalState::Stress,
            Emotion::Crisis => EmotionalState::Crisis,
        }
    }
}

impl From<&EmotionalScore> for EmotionalState {
    fn from(score: &EmotionalScore) -> Self {
        score.dominant().map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_prefers_highest() {
        let score = EmotionalScore {
            anxiety: 2,
            depression: 3,
            ..Default::default()
        };
        assert_eq!(score.dominant(), Some(Emotion::Depression));
    }

    #[test]
    fn test_dominant_tie_goes_to_enumeration_order() {
        let score = EmotionalScore {
            stress: 2,
            anger: 2,
            anxiety: 2,
            ..Default::default()
        };
        assert_eq!(score.dominant(), Some(Emotion::Anxiety));
    }

    #[test]
    fn test_zero_score_is_neutral() {
        let score = EmotionalScore::default();
        assert!(score.is_zero());
        assert_eq!(EmotionalState::from(&score), EmotionalState::Neutral);
    }

    #[test]
    fn test_total_and_add() {
        let mut score = EmotionalScore::default();
        score.add(Emotion::Crisis, 5);
        score.add(Emotion::Stress, 2);
        assert_eq!(score.total(), 7);
        assert_eq!(score.get(Emotion::Crisis), 5);
    }

    #[test]
    fn test_serializes_as_category_map() {
        let score = EmotionalScore {
            loneliness: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json["loneliness"], 2);
        assert_eq!(json["crisis"], 0);
    }
}
