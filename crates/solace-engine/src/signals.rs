// Keyword-based emotional signal extraction

use regex::Regex;
use solace_types::{Emotion, EmotionalScore};
use std::sync::LazyLock;

use crate::crisis::CRISIS_PHRASES;
use crate::patterns::{keywords, phrases};

pub const BASE_WEIGHT: u32 = 2;
pub const BONUS_WEIGHT: u32 = 1;
pub const CRISIS_WEIGHT: u32 = 5;

struct SignalRule {
    emotion: Emotion,
    base: Regex,
    weight: u32,
    bonus: Option<Regex>,
}

impl SignalRule {
    fn new(emotion: Emotion, base: &str, weight: u32, bonus: Option<&str>) -> Self {
        Self {
            emotion,
            base: keywords(base),
            weight,
            bonus: bonus.map(keywords),
        }
    }

    fn crisis() -> Self {
        Self {
            emotion: Emotion::Crisis,
            base: phrases(CRISIS_PHRASES),
            weight: CRISIS_WEIGHT,
            bonus: None,
        }
    }

    fn score(&self, text: &str) -> u32 {
        if !self.base.is_match(text) {
            return 0;
        }
        match &self.bonus {
            Some(bonus) if bonus.is_match(text) => self.weight + BONUS_WEIGHT,
            _ => self.weight,
        }
    }
}

static SIGNAL_RULES: LazyLock<Vec<SignalRule>> = LazyLock::new(|| {
    vec![
        SignalRule::new(
            Emotion::Anxiety,
            "anxious|anxiety|worried|panic|overwhelmed|nervous|scared|fear",
            BASE_WEIGHT,
            Some("panic|overwhelmed"),
        ),
        SignalRule::new(
            Emotion::Depression,
            "sad|depressed|hopeless|empty|numb|down|blue|tired|exhausted",
            BASE_WEIGHT,
            Some("hopeless|empty|numb"),
        ),
        SignalRule::new(
            Emotion::Anger,
            "angry|frustrated|irritated|mad|rage|annoyed|pissed",
            BASE_WEIGHT,
            None,
        ),
        SignalRule::new(
            Emotion::Loneliness,
            "lonely|alone|isolated|no one understands|empty|abandoned",
            BASE_WEIGHT,
            None,
        ),
        SignalRule::new(
            Emotion::Stress,
            "stress|stressed|pressure|burnout|overwhelmed|can't cope",
            BASE_WEIGHT,
            None,
        ),
        SignalRule::crisis(),
    ]
});

/// Score a message across every emotion category.
///
/// Matching is substring based on the lower-cased text, so "mad" also hits
/// inside "made". Categories are scored independently of each other.
pub fn extract(text: &str) -> EmotionalScore {
    let text = text.to_lowercase();
    let mut score = EmotionalScore::default();
    if text.trim().is_empty() {
        return score;
    }

    for rule in SIGNAL_RULES.iter() {
        let weight = rule.score(&text);
        if weight > 0 {
            score.add(rule.emotion, weight);
        }
    }
    score
}
