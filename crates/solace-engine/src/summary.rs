// Conversation summary reducer

use chrono::{DateTime, Utc};
use solace_types::{ConversationSummary, EmotionalState, LastSample};

use crate::insights::generate_insights;
use crate::risk::classify;
use crate::signals::extract;
use crate::tracker::{update_concerns, update_strategies};
use crate::trend::estimate_trend;

/// One user turn, with the assistant reply when it is already known
#[derive(Debug, Clone, Copy)]
pub struct TurnInput<'a> {
    pub user_message: &'a str,
    pub assistant_reply: Option<&'a str>,
    pub timestamp: DateTime<Utc>,
}

impl<'a> TurnInput<'a> {
    pub fn new(user_message: &'a str) -> Self {
        Self {
            user_message,
            assistant_reply: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_reply(mut self, reply: &'a str) -> Self {
        self.assistant_reply = Some(reply);
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Fold one user turn into the summary.
///
/// Everything except the rolling lists and the trend baseline is recomputed
/// from the current message.
pub fn reduce(prior: &ConversationSummary, turn: &TurnInput<'_>) -> ConversationSummary {
    let score = extract(turn.user_message);
    let risk_level = classify(&score);
    let mood_trend = estimate_trend(&score, prior.last_updated.as_ref());

    let primary_concerns = update_concerns(turn.user_message, &prior.primary_concerns);
    let coping_strategies_used = match turn.assistant_reply {
        Some(reply) => update_strategies(reply, &prior.coping_strategies_used),
        None => prior.coping_strategies_used.clone(),
    };

    let key_insights = generate_insights(&primary_concerns, risk_level, mood_trend);

    ConversationSummary {
        emotional_state: EmotionalState::from(&score),
        risk_level,
        primary_concerns,
        coping_strategies_used,
        mood_trend,
        last_updated: Some(LastSample {
            message: turn.user_message.to_string(),
            timestamp: turn.timestamp,
            emotional_score: score,
        }),
        key_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_types::{Concern, CopingStrategy, MoodTrend, RiskLevel};

    #[test]
    fn test_anxious_and_sleepless_turn() {
        let summary = reduce(
            &ConversationSummary::new(),
            &TurnInput::new("I'm feeling anxious and can't sleep"),
        );

        assert_eq!(summary.emotional_state, EmotionalState::Anxiety);
        assert_eq!(summary.risk_level, RiskLevel::Low);
        assert!(summary.has_concern(Concern::Anxiety));
        assert!(summary.has_concern(Concern::Sleep));
        assert_eq!(summary.mood_trend, MoodTrend::Stable);
        assert_eq!(
            summary.key_insights,
            vec!["Anxiety appears to be affecting sleep patterns".to_string()]
        );
    }

    #[test]
    fn test_crisis_turn() {
        let summary = reduce(
            &ConversationSummary::new(),
            &TurnInput::new("I want to kill myself"),
        );
        assert_eq!(summary.risk_level, RiskLevel::Crisis);
        assert_eq!(summary.emotional_state, EmotionalState::Crisis);
        assert_eq!(summary.mood_trend, MoodTrend::Declining);
    }

    #[test]
    fn test_risk_is_not_sticky() {
        let first = reduce(
            &ConversationSummary::new(),
            &TurnInput::new("I want to kill myself"),
        );
        let second = reduce(&first, &TurnInput::new("ok, I'm talking to my sister now"));
        assert_eq!(second.risk_level, RiskLevel::Low);
        assert_eq!(second.emotional_state, EmotionalState::Neutral);
        assert_eq!(second.mood_trend, MoodTrend::Improving);
    }

    #[test]
    fn test_reply_feeds_strategies() {
        let summary = reduce(
            &ConversationSummary::new(),
            &TurnInput::new("so stressed").with_reply("Try some slow breathing with me."),
        );
        assert_eq!(summary.coping_strategies_used, vec![CopingStrategy::Breathing]);

        let summary = reduce(
            &summary,
            &TurnInput::new("still tense").with_reply("Then take a short break."),
        );
        assert_eq!(
            summary.coping_strategies_used,
            vec![CopingStrategy::Breathing, CopingStrategy::SelfCare]
        );
    }

    #[test]
    fn test_last_updated_tracks_current_turn() {
        let at = Utc::now();
        let summary = reduce(
            &ConversationSummary::new(),
            &TurnInput::new("lonely tonight").at(at),
        );
        let last = summary.last_updated.expect("sample recorded");
        assert_eq!(last.message, "lonely tonight");
        assert_eq!(last.timestamp, at);
        assert_eq!(last.emotional_score.loneliness, 2);
    }
}
